use std::path::PathBuf;

/// Order of the dimensions in the model's input tensor, batch first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputLayout {
    /// `[1, height, width, 3]`, the Keras default.
    Nhwc,
    /// `[1, 3, height, width]`
    Nchw,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ModelConfig {
    pub onnx_model_path: PathBuf,
    pub labels_path: Option<PathBuf>,
    /// (width, height)
    pub input_size: (u32, u32),
    pub input_layout: InputLayout,
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            onnx_model_path: PathBuf::from("data/herb_identifier.onnx"),
            labels_path: None,
            input_size: (160, 160),
            input_layout: InputLayout::Nhwc,
        }
    }
}

impl ModelConfig {
    pub fn input_shape(&self) -> [usize; 4] {
        let (width, height) = (self.input_size.0 as usize, self.input_size.1 as usize);
        match self.input_layout {
            InputLayout::Nhwc => [1, height, width, 3],
            InputLayout::Nchw => [1, 3, height, width],
        }
    }
}
