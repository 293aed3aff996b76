use serde::{Deserialize, Serialize};

/// A term and how many results carry it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryCount {
    pub term: String,
    pub count: u32,
}

/// A facet over one schema node, with the top terms for the current search.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Classification {
    pub id: u64,
    pub name: String,
    pub schema_node: String,
    pub max_display_results: u32,
    pub categories: Vec<CategoryCount>,
    pub order_index: u32,
}

impl Classification {
    /// Categories to show before "show more" is pressed.
    pub fn visible_categories(&self, show_all: bool) -> &[CategoryCount] {
        if show_all {
            &self.categories
        } else {
            let end = (self.max_display_results as usize).min(self.categories.len());
            &self.categories[..end]
        }
    }
}

/// Sort classifications by their configured order.
pub fn sort_classifications(classifications: &mut [Classification]) {
    classifications.sort_by_key(|c| c.order_index);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn classification(order_index: u32, terms: &[&str]) -> Classification {
        Classification {
            id: order_index as u64,
            name: format!("c{order_index}"),
            schema_node: "/item/keyword".to_string(),
            max_display_results: 2,
            categories: terms
                .iter()
                .map(|t| CategoryCount {
                    term: t.to_string(),
                    count: 1,
                })
                .collect(),
            order_index,
        }
    }

    #[test]
    fn visible_categories_respects_limit() {
        let c = classification(0, &["a", "b", "c"]);
        assert_eq!(c.visible_categories(false).len(), 2);
        assert_eq!(c.visible_categories(true).len(), 3);
        let short = classification(0, &["a"]);
        assert_eq!(short.visible_categories(false).len(), 1);
    }

    #[test]
    fn sorted_by_order_index() {
        let mut list = vec![classification(2, &[]), classification(0, &[]), classification(1, &[])];
        sort_classifications(&mut list);
        let order: Vec<u32> = list.iter().map(|c| c.order_index).collect();
        assert_eq!(order, vec![0, 1, 2]);
    }
}
