use crate::image_classifier::impl_tract_onnx::ImageClassifierTractOnnx;
use crate::image_classifier::interface::ImageClassifier;
use crate::image_classifier::labels::ClassLabels;
use crate::image_classifier::models::model_config::{InputLayout, ModelConfig};
use crate::image_classifier::test::fixture::Fixture;
use crate::library::error::HerbalError;
use tract_onnx::pb;
use tract_onnx::prelude::*;

fn int_attribute(name: &str, value: i64) -> pb::AttributeProto {
    pb::AttributeProto {
        name: name.to_string(),
        r#type: pb::attribute_proto::AttributeType::Int as i32,
        i: value,
        ..Default::default()
    }
}

fn ints_attribute(name: &str, values: &[i64]) -> pb::AttributeProto {
    pb::AttributeProto {
        name: name.to_string(),
        r#type: pb::attribute_proto::AttributeType::Ints as i32,
        ints: values.to_vec(),
        ..Default::default()
    }
}

fn node(
    op_type: &str,
    inputs: &[&str],
    output: &str,
    attribute: Vec<pb::AttributeProto>,
) -> pb::NodeProto {
    pb::NodeProto {
        name: output.to_string(),
        op_type: op_type.to_string(),
        input: inputs.iter().map(|i| i.to_string()).collect(),
        output: vec![output.to_string()],
        attribute,
        ..Default::default()
    }
}

/// Averages each colour channel over the image, then projects the three
/// means onto `class_count` logits and applies a softmax.
fn pooled_linear_model(class_count: usize, layout: InputLayout) -> InferenceModel {
    let spatial_axes = match layout {
        InputLayout::Nhwc => [1, 2],
        InputLayout::Nchw => [2, 3],
    };
    let weights: Vec<f32> = (0..3 * class_count)
        .map(|i| ((i * 7) % 11) as f32 * 0.5 - 2.0)
        .collect();

    let float = pb::tensor_proto::DataType::Float as i32;
    let graph = pb::GraphProto {
        name: "pooled_linear".to_string(),
        input: vec![pb::ValueInfoProto {
            name: "input".to_string(),
            r#type: Some(pb::TypeProto {
                value: Some(pb::type_proto::Value::TensorType(pb::type_proto::Tensor {
                    elem_type: float,
                    shape: None,
                })),
                ..Default::default()
            }),
            ..Default::default()
        }],
        initializer: vec![pb::TensorProto {
            name: "weights".to_string(),
            dims: vec![3, class_count as i64],
            data_type: float,
            float_data: weights,
            ..Default::default()
        }],
        node: vec![
            node(
                "ReduceMean",
                &["input"],
                "pooled",
                vec![ints_attribute("axes", &spatial_axes), int_attribute("keepdims", 0)],
            ),
            node("MatMul", &["pooled", "weights"], "logits", vec![]),
            node("Softmax", &["logits"], "probabilities", vec![int_attribute("axis", 1)]),
        ],
        output: vec![pb::ValueInfoProto {
            name: "probabilities".to_string(),
            ..Default::default()
        }],
        ..Default::default()
    };
    let proto = pb::ModelProto {
        ir_version: 7,
        opset_import: vec![pb::OperatorSetIdProto {
            domain: String::new(),
            version: 13,
        }],
        graph: Some(graph),
        ..Default::default()
    };

    tract_onnx::onnx().model_for_proto_model(&proto).unwrap()
}

#[test]
fn test_model_with_fewer_classes_than_labels_is_rejected() {
    let f = Fixture::new();

    let result = ImageClassifierTractOnnx::from_model(
        pooled_linear_model(5, InputLayout::Nhwc),
        ModelConfig::default(),
        ClassLabels::builtin(),
        f.logger.clone(),
    );

    assert!(matches!(result, Err(HerbalError::LabelMismatch(_))));
}

#[test]
fn test_onnx_classification_is_deterministic_and_in_bounds() {
    let f = Fixture::new();
    let classifier = ImageClassifierTractOnnx::from_model(
        pooled_linear_model(20, InputLayout::Nhwc),
        ModelConfig::default(),
        f.labels.clone(),
        f.logger.clone(),
    )
    .unwrap();
    let image = f.leaf_image(300, 77, 9);

    let probabilities = classifier.predict(&image).unwrap();
    assert_eq!(probabilities.len(), 20);
    let total: f32 = probabilities.iter().sum();
    assert!((total - 1.0).abs() < 1e-4);

    let first = classifier.classify(&image).unwrap();
    let second = classifier.classify(&image).unwrap();

    assert_eq!(first, second);
    assert!(first.label_index < f.labels.len());
    assert_eq!(f.labels.get(first.label_index), Some(first.label.as_str()));
    assert!((0.0..=100.0).contains(&first.confidence));
}

#[test]
fn test_onnx_model_with_channels_first_input() {
    let f = Fixture::new();
    let config = ModelConfig {
        input_layout: InputLayout::Nchw,
        input_size: (96, 64),
        ..ModelConfig::default()
    };
    let classifier = ImageClassifierTractOnnx::from_model(
        pooled_linear_model(20, InputLayout::Nchw),
        config,
        f.labels.clone(),
        f.logger.clone(),
    )
    .unwrap();

    let result = classifier.classify(&f.leaf_image(40, 120, 3)).unwrap();

    assert!(result.label_index < f.labels.len());
    assert!((0.0..=100.0).contains(&result.confidence));
}
