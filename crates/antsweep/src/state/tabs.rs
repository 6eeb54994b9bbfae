/// Tab identifiers for the viewer, one per figure.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TabId {
    #[default]
    Trends,
    Summary,
}

impl TabId {
    pub const ALL: [TabId; 2] = [TabId::Trends, TabId::Summary];

    pub fn name(&self) -> &'static str {
        match self {
            TabId::Trends => "Parameter Trends",
            TabId::Summary => "Cross-Parameter Summary",
        }
    }

    pub fn index(&self) -> usize {
        match self {
            TabId::Trends => 0,
            TabId::Summary => 1,
        }
    }

    pub fn from_index(index: usize) -> Option<Self> {
        match index {
            0 => Some(TabId::Trends),
            1 => Some(TabId::Summary),
            _ => None,
        }
    }

    /// The following tab, wrapping around
    pub fn next(&self) -> Self {
        Self::from_index((self.index() + 1) % Self::ALL.len()).unwrap_or_default()
    }
}
