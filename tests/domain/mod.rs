mod inference_state_test;
mod staged_artifacts_test;
