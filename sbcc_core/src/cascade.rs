//! # Cascade Rules
//!
//! Dependent-field updates that run inside the same mutation that
//! triggered them. There is exactly one rule: changing a row's component
//! re-derives its Green Mark category from the catalogue mapping.
//!
//! The derived value always wins. A manual category override survives only
//! until the next component change, and a component with no mapping clears
//! the category. Applying the rule twice with the same component is a
//! no-op, so replays are harmless.

use crate::catalogue::Catalogue;
use crate::row::Row;

/// Re-derive `green_mark_category` from the row's current component.
///
/// Called after every accepted `component_id` change, before the outputs
/// are recomputed.
pub fn apply_component_cascade(catalogue: &Catalogue, row: &mut Row) {
    row.green_mark_category = catalogue.category_for(&row.component_id);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::project::Project;
    use crate::row::GreenMarkCategory;

    #[test]
    fn test_cascade_overwrites_manual_override() {
        let cat = Catalogue::builtin();
        let mut row = Project::default_row(&cat);

        row.green_mark_category = Some(GreenMarkCategory::Glass);
        apply_component_cascade(&cat, &mut row);
        assert_eq!(row.green_mark_category, Some(GreenMarkCategory::Concrete));
    }

    #[test]
    fn test_cascade_clears_when_unmapped() {
        let cat = Catalogue::builtin();
        let mut row = Project::default_row(&cat);

        row.component_id = "sawn-timber".to_string();
        row.green_mark_category = Some(GreenMarkCategory::Steel);
        apply_component_cascade(&cat, &mut row);
        assert_eq!(row.green_mark_category, None);

        row.component_id = "no-such-component".to_string();
        apply_component_cascade(&cat, &mut row);
        assert_eq!(row.green_mark_category, None);
    }

    #[test]
    fn test_cascade_is_idempotent() {
        let cat = Catalogue::builtin();
        let mut row = Project::default_row(&cat);
        row.component_id = "structural-steel".to_string();

        apply_component_cascade(&cat, &mut row);
        let first = row.green_mark_category;
        apply_component_cascade(&cat, &mut row);
        assert_eq!(row.green_mark_category, first);
        assert_eq!(first, Some(GreenMarkCategory::Steel));
    }
}
