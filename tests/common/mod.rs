#![allow(dead_code)]

use vellum::{JobConfig, JobInfo, RenderEngine, RenderError, RenderJob, default_registry};

pub fn test_info() -> JobInfo {
    JobInfo {
        tool: "vellum".to_string(),
        version: "0.1.0".to_string(),
        build: "test".to_string(),
        user: "tester".to_string(),
    }
}

/// Drive a complete document through the named format: job and graph
/// bracketing around `scene`, which draws the content.
pub fn render_document(
    format_name: &str,
    mut config: JobConfig,
    info: JobInfo,
    scene: impl FnOnce(
        &mut dyn RenderEngine<Vec<u8>>,
        &mut RenderJob<Vec<u8>>,
    ) -> Result<(), RenderError>,
) -> Vec<u8> {
    let registry = default_registry::<Vec<u8>>();
    let record = registry.select(format_name).unwrap();
    let mut engine = record.create();
    config.format = record.id;

    let mut job = RenderJob::new(config, info, Vec::new());
    engine.begin_job(&mut job).unwrap();
    engine.begin_graph(&mut job).unwrap();
    scene(engine.as_mut(), &mut job).unwrap();
    engine.end_graph(&mut job).unwrap();
    engine.end_job(&mut job).unwrap();
    job.finish().unwrap()
}

pub fn render_with(
    format_name: &str,
    graph_name: &str,
    width: f64,
    height: f64,
    scene: impl FnOnce(
        &mut dyn RenderEngine<Vec<u8>>,
        &mut RenderJob<Vec<u8>>,
    ) -> Result<(), RenderError>,
) -> Vec<u8> {
    render_document(
        format_name,
        JobConfig::new(graph_name, width, height),
        test_info(),
        scene,
    )
}

/// Like [`render_with`], decoded to a string for fragment assertions.
pub fn render_str(
    format_name: &str,
    graph_name: &str,
    width: f64,
    height: f64,
    scene: impl FnOnce(
        &mut dyn RenderEngine<Vec<u8>>,
        &mut RenderJob<Vec<u8>>,
    ) -> Result<(), RenderError>,
) -> String {
    String::from_utf8(render_with(format_name, graph_name, width, height, scene)).unwrap()
}
