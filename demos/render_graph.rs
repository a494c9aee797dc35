//! Renders a hand-built two-node drawing and writes the markup out.
//!
//! Usage:
//!
//! ```text
//! cargo run --example render_graph                # vml to stdout
//! cargo run --example render_graph vmlz out.gz    # compressed, to a file
//! ```

use std::env;
use std::fs::File;
use std::io::{self, BufWriter, Write};

use vellum::{
    Color, JobConfig, JobInfo, PenStyle, Pointf, RenderEngine, RenderError, RenderJob, TextSpan,
    default_registry,
};

fn draw<W: Write>(
    engine: &mut dyn RenderEngine<W>,
    job: &mut RenderJob<W>,
) -> Result<(), RenderError> {
    engine.begin_job(job)?;
    engine.begin_graph(job)?;

    engine.comment(job, "start")?;
    job.push_obj();
    job.obj_mut().fill_color = Color::named("lightblue");
    engine.begin_anchor(
        job,
        Some("https://example.com/start"),
        Some("entry point"),
        None,
    )?;
    engine.ellipse(job, Pointf::new(75.0, 102.0), Pointf::new(102.0, 120.0), true)?;
    engine.text_span(
        job,
        Pointf::new(75.0, 96.0),
        &TextSpan::new("start", "Times New Roman", 14.0),
    )?;
    engine.end_anchor(job)?;
    job.pop_obj();

    engine.comment(job, "start->end")?;
    job.push_obj();
    job.obj_mut().pen_color = Color::named("crimson");
    job.obj_mut().pen_style = PenStyle::Dashed;
    engine.bezier(
        job,
        &[
            Pointf::new(75.0, 84.0),
            Pointf::new(75.0, 72.0),
            Pointf::new(75.0, 57.0),
            Pointf::new(75.0, 44.0),
        ],
        false,
        true,
        false,
    )?;
    job.obj_mut().fill_color = Color::named("crimson");
    engine.polygon(
        job,
        &[
            Pointf::new(71.5, 44.0),
            Pointf::new(75.0, 34.0),
            Pointf::new(78.5, 44.0),
        ],
        true,
    )?;
    job.pop_obj();

    engine.comment(job, "end")?;
    job.push_obj();
    job.obj_mut().fill_color = Color::rgb(240, 240, 240);
    engine.ellipse(job, Pointf::new(75.0, 18.0), Pointf::new(102.0, 36.0), true)?;
    engine.text_span(
        job,
        Pointf::new(75.0, 12.0),
        &TextSpan::new("end", "Times New Roman", 14.0),
    )?;
    job.pop_obj();

    engine.end_graph(job)?;
    engine.end_job(job)
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let args: Vec<String> = env::args().skip(1).collect();
    let format = args.first().map(String::as_str).unwrap_or("vml");
    let out_path = args.get(1);

    let registry = default_registry::<Box<dyn Write>>();
    let record = registry.select(format)?;
    let mut engine = record.create();

    log::info!(
        "rendering sample graph as {format} to {}",
        out_path.map(String::as_str).unwrap_or("stdout")
    );

    let writer: Box<dyn Write> = match out_path {
        Some(path) => Box::new(BufWriter::new(File::create(path)?)),
        None => Box::new(io::stdout().lock()),
    };

    let mut config = JobConfig::new("sample", 150.0, 120.0);
    config.format = record.id;
    let info = JobInfo {
        tool: "vellum".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        build: "demo".to_string(),
        user: env::var("USER").unwrap_or_else(|_| "anonymous".to_string()),
    };
    let mut job = RenderJob::new(config, info, writer);

    draw(engine.as_mut(), &mut job)?;

    let mut writer = job.finish()?;
    writer.flush()?;
    Ok(())
}
