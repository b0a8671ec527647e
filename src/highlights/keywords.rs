//! Weighted keyword dictionaries for importance scoring.
//!
//! Terms are matched as substrings of the lowercased segment text; every
//! matching term contributes its weight once.

/// A term and the weight it adds when present.
pub type WeightedTerm = (&'static str, f64);

/// The four dictionaries importance scoring sums over.
#[derive(Debug)]
pub struct ImportanceDictionaries {
    /// Launches, reveals and firsts.
    pub announcement: &'static [WeightedTerm],
    /// Technology and product names.
    pub technology: &'static [WeightedTerm],
    /// Speaker enthusiasm.
    pub excitement: &'static [WeightedTerm],
    /// Practical value to the viewer.
    pub practical: &'static [WeightedTerm],
}

impl ImportanceDictionaries {
    /// All dictionaries in scoring order.
    pub fn all(&self) -> [&'static [WeightedTerm]; 4] {
        [
            self.announcement,
            self.technology,
            self.excitement,
            self.practical,
        ]
    }
}

/// Default English dictionaries, tuned for product keynotes and reviews.
pub static IMPORTANCE_DICTIONARIES: ImportanceDictionaries = ImportanceDictionaries {
    announcement: &[
        ("introducing", 2.5),
        ("announce", 2.0),
        ("biggest", 2.0),
        ("launch", 2.0),
        ("available today", 2.0),
        ("for the first time", 1.5),
        ("brand new", 1.5),
        ("redesign", 1.5),
        ("coming soon", 1.0),
        ("all-new", 1.0),
    ],
    technology: &[
        ("liquid glass", 3.0),
        ("apple intelligence", 2.5),
        ("artificial intelligence", 2.0),
        ("vision pro", 2.0),
        ("machine learning", 1.5),
        ("ios", 1.5),
        ("macos", 1.5),
        ("iphone", 1.0),
        ("chip", 1.0),
        ("neural engine", 1.0),
    ],
    excitement: &[
        ("game changer", 2.0),
        ("incredible", 1.0),
        ("amazing", 1.0),
        ("huge", 1.0),
        ("finally", 1.0),
        ("wow", 1.0),
        ("love", 0.5),
    ],
    practical: &[
        ("how to", 1.5),
        ("save time", 1.5),
        ("you can", 1.0),
        ("shortcut", 1.0),
        ("works with", 1.0),
        ("tip", 1.0),
        ("free", 0.5),
    ],
};
