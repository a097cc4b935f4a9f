use crate::image_classifier::impl_fake::ImageClassifierFake;
use crate::image_classifier::interface::ImageClassifier;
use crate::image_classifier::labels::ClassLabels;
use crate::image_classifier::test::fixture::Fixture;
use crate::library::error::HerbalError;

#[test]
fn test_bundled_labels_match_builtin_order() {
    let f = Fixture::new();
    assert_eq!(f.labels, ClassLabels::builtin());
}

#[test]
fn test_label_index_always_in_bounds() {
    let f = Fixture::new();

    for seed in 0..32u8 {
        for (width, height) in [(160, 160), (640, 480), (31, 200)] {
            let image = f.leaf_image(width, height, seed);
            let result = f.image_classifier.classify(&image).unwrap();

            assert!(result.label_index < f.labels.len());
            assert_eq!(f.labels.get(result.label_index), Some(result.label.as_str()));
            assert!((0.0..=100.0).contains(&result.confidence));
        }
    }
}

#[test]
fn test_classification_is_deterministic() {
    let f = Fixture::new();
    let image = f.leaf_image(300, 200, 7);

    let expected = f.image_classifier.classify(&image).unwrap();
    for _ in 0..5 {
        assert_eq!(f.image_classifier.classify(&image).unwrap(), expected);
    }
}

#[test]
fn test_model_with_more_outputs_than_labels_fails() {
    let f = Fixture::new();
    let classifier =
        ImageClassifierFake::new(f.labels.clone(), &f.model_config, f.logger.clone())
            .with_probabilities(vec![0.05; 21]);

    let result = classifier.classify(&f.leaf_image(10, 10, 0));
    assert!(matches!(result, Err(HerbalError::LabelMismatch(_))));
}
