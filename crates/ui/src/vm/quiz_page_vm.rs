use wikiquiz_core::model::{EntityGroup, Quiz};

/// Items shown per entity category before collapsing.
pub const ENTITY_PREVIEW_LIMIT: usize = 3;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EntityPreviewVm {
    pub category: String,
    pub shown: Vec<String>,
    /// "+2 more" when items were cut.
    pub more: Option<String>,
}

impl From<&EntityGroup> for EntityPreviewVm {
    fn from(group: &EntityGroup) -> Self {
        let hidden = group.items.len().saturating_sub(ENTITY_PREVIEW_LIMIT);
        Self {
            category: group.category.clone(),
            shown: group
                .items
                .iter()
                .take(ENTITY_PREVIEW_LIMIT)
                .cloned()
                .collect(),
            more: (hidden > 0).then(|| format!("+{hidden} more")),
        }
    }
}

#[must_use]
pub fn entity_previews(quiz: &Quiz) -> Vec<EntityPreviewVm> {
    quiz.key_entities.iter().map(EntityPreviewVm::from).collect()
}
