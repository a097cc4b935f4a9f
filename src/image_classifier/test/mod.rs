mod classifier_test;
mod fixture;
mod onnx_test;
