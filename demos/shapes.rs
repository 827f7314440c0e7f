use pdfsmith::{BackendProvider, DocumentBuilder, PdfsmithError, Point};
use std::env;

/// Draws one page of every vector primitive with a few graphics-state changes.
fn draw(doc: &mut dyn DocumentBuilder) -> Result<(), PdfsmithError> {
    doc.add_paragraph("Vector primitives")?;

    doc.set_stroke_color(200, 30, 30)?;
    doc.set_line_width(2.0)?;
    doc.draw_line(50.0, 700.0, 545.0, 700.0)?;

    doc.save_state()?;
    doc.set_line_dash(&[6.0, 3.0], 0.0)?;
    doc.draw_rectangle(50.0, 560.0, 150.0, 100.0)?;
    doc.restore_state()?;

    doc.set_fill_color(30, 120, 200)?;
    doc.fill_rectangle(220.0, 560.0, 150.0, 100.0)?;

    doc.set_stroke_color(20, 140, 60)?;
    doc.draw_circle(460.0, 610.0, 50.0)?;
    doc.draw_ellipse(125.0, 450.0, 75.0, 35.0)?;
    doc.draw_arc(295.0, 450.0, 50.0, 0.0, 270.0)?;
    doc.draw_polygon(&[
        Point::new(410.0, 410.0),
        Point::new(510.0, 410.0),
        Point::new(460.0, 490.0),
    ])?;

    doc.new_page()?;
    doc.add_paragraph("Stroke color and width carry over to this page.")?;
    doc.draw_circle(297.0, 500.0, 120.0)?;
    Ok(())
}

fn main() -> Result<(), PdfsmithError> {
    if env::var("RUST_LOG").is_err() {
        unsafe {
            env::set_var("RUST_LOG", "pdfsmith=debug");
        }
    }
    env_logger::init();

    let output = env::args().nth(1).unwrap_or_else(|| "shapes.pdf".to_string());
    let mut doc = BackendProvider::new("lopdf")?.create();
    draw(doc.as_mut())?;
    doc.save(output.as_ref())?;
    doc.close();

    println!("Success! Generated {}", output);
    Ok(())
}
