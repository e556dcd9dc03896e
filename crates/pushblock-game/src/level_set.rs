/// An ordered collection of level texts.
///
/// Texts are parsed lazily when a level is loaded, so an invalid entry only fails the load that
/// selects it.
///
/// # Example
///
/// ```
/// use pushblock_game::LevelSet;
///
/// let levels: LevelSet = ["#P.G#", "#PBG#"].into_iter().collect();
/// assert_eq!(levels.len(), 2);
/// assert_eq!(levels.get(1), Some("#PBG#"));
/// assert_eq!(levels.get(2), None);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LevelSet {
    levels: Vec<String>,
}

impl LevelSet {
    /// Creates a level set from level texts, in play order.
    #[must_use]
    pub fn new(levels: Vec<String>) -> Self {
        Self { levels }
    }

    /// Returns the number of levels.
    #[must_use]
    pub fn len(&self) -> usize {
        self.levels.len()
    }

    /// Returns `true` if the set holds no levels.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }

    /// Returns the text of level `index`.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&str> {
        self.levels.get(index).map(String::as_str)
    }

    /// Returns the index of the last level, or `None` if the set is empty.
    #[must_use]
    pub fn last_index(&self) -> Option<usize> {
        self.levels.len().checked_sub(1)
    }
}

impl<S> FromIterator<S> for LevelSet
where
    S: Into<String>,
{
    fn from_iter<T: IntoIterator<Item = S>>(iter: T) -> Self {
        Self::new(iter.into_iter().map(Into::into).collect())
    }
}
