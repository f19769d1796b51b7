//! Allow-list validation edge case tests for canvas-core

use canvas_core::*;

const FILE_SORT_TYPES: &[&str] = &[
    "name",
    "size",
    "created_at",
    "updated_at",
    "content_type",
    "user",
];

mod scalar_candidates {
    use super::*;

    #[test]
    fn test_every_member_passes() {
        for candidate in FILE_SORT_TYPES {
            assert!(validate_attr_is_acceptable(Some(*candidate), FILE_SORT_TYPES).is_ok());
        }
    }

    #[test]
    fn test_absent_always_passes() {
        assert!(validate_attr_is_acceptable(None::<&str>, FILE_SORT_TYPES).is_ok());
        assert!(validate_attr_is_acceptable(None::<&str>, &[]).is_ok());
    }

    #[test]
    fn test_non_member_names_value_and_full_set() {
        let err = validate_attr_is_acceptable(Some("bogus"), FILE_SORT_TYPES).unwrap_err();
        assert_eq!(err.value, "bogus");
        assert_eq!(
            err.acceptable,
            vec!["name", "size", "created_at", "updated_at", "content_type", "user"]
        );
    }

    #[test]
    fn test_case_sensitive() {
        assert!(validate_attr_is_acceptable(Some("Name"), FILE_SORT_TYPES).is_err());
    }

    #[test]
    fn test_empty_string_is_not_a_member() {
        assert!(validate_attr_is_acceptable(Some(""), FILE_SORT_TYPES).is_err());
    }
}

mod sequence_candidates {
    use super::*;

    const LIST_INCLUDE_TYPES: &[&str] = &[
        "submission_history",
        "submission_comments",
        "rubric_assessment",
        "assignment",
        "visibility",
        "course",
        "user",
        "group",
    ];

    #[test]
    fn test_all_members_pass() {
        let include: &[&str] = &["assignment", "user", "group"];
        assert!(validate_attr_is_acceptable(include, LIST_INCLUDE_TYPES).is_ok());
    }

    #[test]
    fn test_first_bad_element_reported() {
        let include: &[&str] = &["assignment", "grades", "scores"];
        let err = validate_attr_is_acceptable(include, LIST_INCLUDE_TYPES).unwrap_err();
        assert_eq!(err.value, "grades");
    }

    #[test]
    fn test_empty_sequence_passes() {
        let include: &[&str] = &[];
        assert!(validate_attr_is_acceptable(include, LIST_INCLUDE_TYPES).is_ok());
    }

    #[test]
    fn test_owned_strings_work() {
        let include = vec!["course".to_string(), "user".to_string()];
        assert!(validate_attr_is_acceptable(&include, LIST_INCLUDE_TYPES).is_ok());
    }
}

mod single_element_sets {
    use super::*;

    // A one-element set matches only its whole element, never its characters
    // or prefixes.
    #[test]
    fn test_whole_string_only() {
        const INCLUDE_TYPES: &[&str] = &["user"];
        assert!(validate_attr_is_acceptable(Some("user"), INCLUDE_TYPES).is_ok());
        for fragment in ["u", "s", "us", "ser", "users"] {
            assert!(
                validate_attr_is_acceptable(Some(fragment), INCLUDE_TYPES).is_err(),
                "fragment '{fragment}' must not pass"
            );
        }
    }

    #[test]
    fn test_external_tab_set() {
        const INCLUDE_TYPES: &[&str] = &["external"];
        assert!(validate_attr_is_acceptable(Some("external"), INCLUDE_TYPES).is_ok());
        assert!(validate_attr_is_acceptable(Some("internal"), INCLUDE_TYPES).is_err());
    }
}
