//! Word polarity tables.

use std::collections::HashMap;
use std::fmt;

/// Maps a lowercase token to an integer polarity weight.
pub trait Lexicon: Send + Sync + fmt::Debug {
    fn weight(&self, token: &str) -> Option<i32>;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// AFINN-style lexicon: integer weights from -5 to +5.
#[derive(Debug, Clone)]
pub struct AfinnLexicon {
    weights: HashMap<String, i32>,
}

impl AfinnLexicon {
    /// Built-in table covering general and sports-coverage vocabulary.
    pub fn new() -> Self {
        Self::from_entries(BUILTIN.iter().map(|(w, s)| (w.to_string(), *s)))
    }

    pub fn empty() -> Self {
        Self { weights: HashMap::new() }
    }

    pub fn from_entries(entries: impl IntoIterator<Item = (String, i32)>) -> Self {
        let mut lexicon = Self::empty();
        lexicon.extend(entries);
        lexicon
    }

    /// Insert or override entries. Weights are clamped to the AFINN range.
    pub fn extend(&mut self, entries: impl IntoIterator<Item = (String, i32)>) {
        for (word, weight) in entries {
            self.weights.insert(word.to_lowercase(), weight.clamp(-5, 5));
        }
    }
}

impl Default for AfinnLexicon {
    fn default() -> Self {
        Self::new()
    }
}

impl Lexicon for AfinnLexicon {
    fn weight(&self, token: &str) -> Option<i32> {
        self.weights.get(token).copied()
    }

    fn len(&self) -> usize {
        self.weights.len()
    }
}

const BUILTIN: &[(&str, i32)] = &[
    // positive
    ("ability", 2),
    ("accomplish", 2),
    ("accomplished", 2),
    ("achievement", 2),
    ("admire", 3),
    ("advantage", 2),
    ("amazing", 4),
    ("awesome", 4),
    ("beautiful", 3),
    ("best", 3),
    ("better", 2),
    ("boost", 1),
    ("brilliant", 4),
    ("calm", 2),
    ("celebrate", 3),
    ("champion", 2),
    ("champions", 2),
    ("cheer", 2),
    ("clean", 2),
    ("confident", 2),
    ("cool", 1),
    ("easy", 1),
    ("effective", 2),
    ("encourage", 2),
    ("encouraging", 2),
    ("energetic", 2),
    ("enjoy", 2),
    ("excellent", 3),
    ("excited", 3),
    ("exciting", 3),
    ("fabulous", 4),
    ("fantastic", 4),
    ("fine", 2),
    ("fun", 4),
    ("glad", 3),
    ("good", 3),
    ("great", 3),
    ("greatest", 3),
    ("happy", 3),
    ("healthy", 2),
    ("help", 2),
    ("hero", 2),
    ("heroic", 3),
    ("hope", 2),
    ("hopeful", 2),
    ("impressive", 3),
    ("improve", 2),
    ("improved", 2),
    ("improvement", 2),
    ("inspire", 2),
    ("inspired", 2),
    ("inspiring", 2),
    ("kind", 2),
    ("like", 2),
    ("love", 3),
    ("loved", 3),
    ("lucky", 3),
    ("motivated", 2),
    ("nice", 3),
    ("outstanding", 5),
    ("perfect", 3),
    ("pleased", 3),
    ("positive", 2),
    ("powerful", 2),
    ("praise", 3),
    ("proud", 2),
    ("rewarding", 2),
    ("safe", 1),
    ("save", 2),
    ("strong", 2),
    ("stronger", 2),
    ("strongest", 2),
    ("success", 2),
    ("successful", 3),
    ("super", 3),
    ("superb", 5),
    ("support", 2),
    ("supported", 2),
    ("sweet", 2),
    ("thank", 2),
    ("thanks", 2),
    ("thrilled", 5),
    ("top", 2),
    ("triumph", 4),
    ("victory", 3),
    ("win", 4),
    ("winner", 4),
    ("winning", 4),
    ("wins", 4),
    ("won", 3),
    ("wonderful", 4),
    ("worth", 2),
    ("yes", 1),
    // negative
    ("abandon", -2),
    ("abuse", -3),
    ("accident", -2),
    ("afraid", -2),
    ("anger", -3),
    ("angry", -3),
    ("annoyed", -2),
    ("arrest", -2),
    ("arrested", -3),
    ("attack", -1),
    ("awful", -3),
    ("bad", -3),
    ("ban", -2),
    ("bankrupt", -3),
    ("blame", -2),
    ("broke", -1),
    ("broken", -1),
    ("collapse", -2),
    ("complain", -2),
    ("concerned", -2),
    ("conflict", -2),
    ("controversial", -2),
    ("controversy", -2),
    ("crash", -2),
    ("crime", -3),
    ("crisis", -3),
    ("critical", -2),
    ("criticism", -2),
    ("criticized", -2),
    ("cry", -1),
    ("damage", -3),
    ("danger", -2),
    ("dead", -3),
    ("death", -2),
    ("defeat", -2),
    ("defeated", -2),
    ("disappoint", -2),
    ("disappointed", -2),
    ("disappointing", -2),
    ("disaster", -2),
    ("doubt", -1),
    ("doubtful", -1),
    ("drop", -1),
    ("dumb", -3),
    ("embarrassed", -2),
    ("error", -2),
    ("fail", -2),
    ("failed", -2),
    ("failure", -2),
    ("fear", -2),
    ("fight", -1),
    ("fired", -2),
    ("frustrated", -2),
    ("frustration", -2),
    ("hate", -3),
    ("horrible", -3),
    ("hurt", -2),
    ("hurts", -2),
    ("ill", -2),
    ("injured", -2),
    ("injuries", -2),
    ("injury", -2),
    ("lose", -3),
    ("loses", -3),
    ("losing", -3),
    ("loss", -3),
    ("lost", -3),
    ("mess", -2),
    ("miss", -2),
    ("missed", -2),
    ("mistake", -2),
    ("negative", -2),
    ("pain", -2),
    ("painful", -2),
    ("poor", -2),
    ("problem", -2),
    ("problems", -2),
    ("questionable", -2),
    ("sad", -2),
    ("scandal", -3),
    ("sick", -2),
    ("struggle", -2),
    ("struggling", -2),
    ("suspend", -1),
    ("suspended", -1),
    ("terrible", -3),
    ("threat", -2),
    ("tired", -2),
    ("trouble", -2),
    ("ugly", -3),
    ("unhappy", -2),
    ("upset", -2),
    ("weak", -2),
    ("worried", -3),
    ("worry", -3),
    ("worse", -3),
    ("worst", -3),
    ("wrong", -2),
];
