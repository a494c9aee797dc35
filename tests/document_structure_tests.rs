mod common;

use std::fs::File;

use common::{render_document, render_str, test_info};
use vellum::{JobConfig, JobInfo, Pointf, RenderJob, TextSpan, default_registry};

#[test]
fn empty_document_matches_byte_for_byte() {
    let out = render_str("vml", "sample", 100.0, 200.0, |_, _| Ok(()));
    let expected = concat!(
        "<?xml version=\"1.1\" encoding=\"UTF-8\" ?>\n",
        "<!DOCTYPE html PUBLIC \"-//W3C//DTD XHTML 1.1//EN\" \"http://www.w3.org/TR/xhtml11/DTD/xhtml11.dtd\">\n",
        "<html xml:lang=\"en\" xmlns=\"http://www.w3.org/1999/xhtml\" xmlns:v=\"urn:schemas-microsoft-com:vml\">\n",
        "<!-- Generated by vellum version 0.1.0 (test)\n",
        "     For user: tester -->\n",
        "<head><title>sample</title><!-- Pages: 1 -->\n",
        "</head>\n",
        "<body>\n",
        "<div class=\"graph\" style=\"width: 75pt; height: 150pt\" coordsize=\"75,150\" coordorigin=\"-4,-146\">\n",
        "<style type=\"text/css\">\n",
        "v\\:* {\n",
        "behavior: url(#default#VML);display:inline-block;position: absolute; left: 0px; top: 0px;\n",
        "}\n",
        "</style>\n",
        "</div>\n",
        "</body>\n",
    );
    assert_eq!(out, expected);
}

#[test]
fn anonymous_graph_has_no_title() {
    let out = render_str("vml", "", 100.0, 100.0, |_, _| Ok(()));
    assert!(!out.contains("<title>"));
    assert!(out.contains("<head><!-- Pages: 1 -->"));
}

#[test]
fn title_and_banner_are_escaped() {
    let mut info = test_info();
    info.user = "A <Coder> & \"friends\"".to_string();
    let out = String::from_utf8(render_document(
        "vml",
        JobConfig::new("a<b>&c", 100.0, 100.0),
        info,
        |_, _| Ok(()),
    ))
    .unwrap();
    assert!(out.contains("<title>a&lt;b&gt;&amp;c</title>"));
    assert!(out.contains("For user: A &lt;Coder&gt; &amp; &quot;friends&quot; -->"));
}

#[test]
fn page_count_multiplies_the_page_grid() {
    let mut config = JobConfig::new("paged", 100.0, 100.0);
    config.pages_x = 2;
    config.pages_y = 3;
    let out = String::from_utf8(render_document("vml", config, test_info(), |_, _| Ok(())))
        .unwrap();
    assert!(out.contains("<!-- Pages: 6 -->"));
}

#[test]
fn document_ends_without_closing_the_html_element() {
    let out = render_str("vml", "g", 100.0, 100.0, |_, _| Ok(()));
    assert!(out.ends_with("</div>\n</body>\n"));
    assert!(!out.contains("</html>"));
}

#[test]
fn drawing_elements_stay_balanced() {
    // Bezier paths are deliberately left out: their path element is
    // emitted self-closed yet still followed by a close tag.
    let out = render_str("vml", "g", 100.0, 200.0, |engine, job| {
        engine.comment(job, "node a")?;
        engine.begin_anchor(job, Some("https://example.com"), None, None)?;
        engine.ellipse(job, Pointf::new(50.0, 60.0), Pointf::new(70.0, 75.0), true)?;
        engine.text_span(job, Pointf::new(50.0, 54.0), &TextSpan::new("a", "Courier", 10.0))?;
        engine.end_anchor(job)?;
        engine.polygon(
            job,
            &[
                Pointf::new(10.0, 20.0),
                Pointf::new(30.0, 20.0),
                Pointf::new(20.0, 40.0),
            ],
            false,
        )?;
        engine.polyline(job, &[Pointf::new(0.0, 0.0), Pointf::new(10.0, 10.0)])
    });

    for (open, close) in [
        ("<div", "</div>"),
        ("<a", "</a>"),
        ("<v:oval", "</v:oval>"),
        ("<v:shape", "</v:shape>"),
        ("<v:path", "</v:path>"),
    ] {
        assert_eq!(
            out.matches(open).count(),
            out.matches(close).count(),
            "unbalanced {open}"
        );
    }
}

#[test]
fn renders_through_a_file_writer() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("out.vml");

    let registry = default_registry::<File>();
    let record = registry.select("vml").unwrap();
    let mut engine = record.create();

    let mut config = JobConfig::new("file", 100.0, 100.0);
    config.format = record.id;
    let file = File::create(&path).unwrap();
    let mut job = RenderJob::new(config, JobInfo::default(), file);

    engine.begin_job(&mut job).unwrap();
    engine.begin_graph(&mut job).unwrap();
    engine.end_graph(&mut job).unwrap();
    engine.end_job(&mut job).unwrap();
    job.finish().unwrap();

    let contents = std::fs::read_to_string(&path).unwrap();
    assert!(contents.starts_with("<?xml version=\"1.1\""));
    assert!(contents.ends_with("</div>\n</body>\n"));
}
