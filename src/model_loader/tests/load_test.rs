use super::fixture::{Fixture, NOT_AN_ONNX_MODEL};
use crate::error::ClassifierError;
use crate::model::impl_fake::ModelFake;
use crate::model_loader::label_set::LabelSet;
use crate::model_loader::load::{
    check_output_width, load, load_label_set, load_model, load_normalization_spec,
};

#[test]
fn test_missing_model_is_reported_first() {
    let f = Fixture::new();
    let labels = f.write("class_names.json", br#"["cat", "dog"]"#);

    let result = load(&f.path("model.onnx"), &labels, None, 64, &f.logger);

    match result {
        Err(ClassifierError::MissingArtifact { path }) => assert!(path.ends_with("model.onnx")),
        other => panic!("unexpected result: {:?}", other.err()),
    }
}

#[test]
fn test_missing_labels() {
    let f = Fixture::new();
    let model = f.write("model.onnx", &NOT_AN_ONNX_MODEL);

    let result = load(&model, &f.path("class_names.json"), None, 64, &f.logger);

    match result {
        Err(ClassifierError::MissingArtifact { path }) => {
            assert!(path.ends_with("class_names.json"))
        }
        other => panic!("unexpected result: {:?}", other.err()),
    }
}

#[test]
fn test_corrupt_model() {
    let f = Fixture::new();
    let model = f.write("model.onnx", &NOT_AN_ONNX_MODEL);
    let labels = f.write("class_names.json", br#"["cat", "dog"]"#);

    let result = load(&model, &labels, None, 64, &f.logger);

    assert!(matches!(result, Err(ClassifierError::CorruptArtifact { .. })));
    // Labels were read before the model failed.
    assert!(f
        .logger
        .lines()
        .iter()
        .any(|line| line.contains("loaded 2 classes: cat, dog")));
}

#[test]
fn test_load_model_directly_rejects_garbage() {
    let f = Fixture::new();
    let model = f.write("model.onnx", &NOT_AN_ONNX_MODEL);

    assert!(matches!(
        load_model(&model, 64),
        Err(ClassifierError::CorruptArtifact { .. })
    ));
    assert!(matches!(
        load_model(&f.path("other.onnx"), 64),
        Err(ClassifierError::MissingArtifact { .. })
    ));
}

#[test]
fn test_zero_image_size_is_rejected_before_io() {
    let f = Fixture::new();

    let result = load(&f.path("model.onnx"), &f.path("labels.txt"), None, 0, &f.logger);

    assert!(matches!(result, Err(ClassifierError::InvalidConfig(_))));
}

#[test]
fn test_json_labels() {
    let f = Fixture::new();
    let path = f.write("class_names.json", br#"["cat", "dog", "bird"]"#);

    let labels = load_label_set(&path).unwrap();

    assert_eq!(labels, LabelSet::new(["cat", "dog", "bird"]).unwrap());
}

#[test]
fn test_text_labels() {
    let f = Fixture::new();
    let path = f.write("labels.txt", b"cat\ndog\n\nbird\n");

    let labels = load_label_set(&path).unwrap();

    assert_eq!(labels.iter().collect::<Vec<_>>(), vec!["cat", "dog", "bird"]);
}

#[test]
fn test_corrupt_labels() {
    let f = Fixture::new();

    let cases: [(&str, &[u8]); 6] = [
        ("not_json.json", b"cat, dog"),
        ("wrong_shape.json", br#"{"0": "cat"}"#),
        ("numbers.json", b"[1, 2, 3]"),
        ("empty.json", b"[]"),
        ("blank.txt", b"\n\n"),
        ("binary.txt", &[0xC3, 0x28, 0xA0, 0xA1]),
    ];

    for (name, contents) in cases {
        let path = f.write(name, contents);
        assert!(
            matches!(
                load_label_set(&path),
                Err(ClassifierError::CorruptArtifact { .. })
            ),
            "{} should be rejected",
            name
        );
    }
}

#[test]
fn test_absent_stats_are_not_an_error() {
    let f = Fixture::new();

    let spec = load_normalization_spec(&f.path("normalization_stats.json")).unwrap();

    assert!(spec.is_none());
}

#[test]
fn test_stats_are_parsed() {
    let f = Fixture::new();
    let path = f.write(
        "normalization_stats.json",
        br#"{"method": "divide_by_255", "min": 0, "max": 255}"#,
    );

    let spec = load_normalization_spec(&path).unwrap().unwrap();

    assert_eq!(spec.method, "divide_by_255");
    assert_eq!(spec.extra.len(), 2);
}

#[test]
fn test_corrupt_stats() {
    let f = Fixture::new();
    let path = f.write("normalization_stats.json", b"method=divide_by_255");

    assert!(matches!(
        load_normalization_spec(&path),
        Err(ClassifierError::CorruptArtifact { .. })
    ));
}

#[test]
fn test_output_width_must_match_labels() {
    let f = Fixture::new();
    let labels = LabelSet::new(["cat", "dog", "bird"]).unwrap();
    let model_path = f.path("model.onnx");

    let matching = ModelFake::fixed(vec![0.2, 0.3, 0.5]);
    assert!(check_output_width(&matching, &labels, &model_path).is_ok());

    let too_wide = ModelFake::fixed(vec![0.25; 4]);
    assert!(matches!(
        check_output_width(&too_wide, &labels, &model_path),
        Err(ClassifierError::CorruptArtifact { .. })
    ));

    let undeclared = ModelFake::failing("no shape");
    assert!(check_output_width(&undeclared, &labels, &model_path).is_ok());
}
