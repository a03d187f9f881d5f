mod run_scan_pipeline;

pub use run_load_test::LoadTestUseCase;
pub use run_scan_pipeline::ScanPipelineUseCase;
