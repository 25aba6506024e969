pub mod streaming_pipeline_executor;
