use clap::Parser;
use pdfsmith::{BuilderConfig, DocumentBuilder, PdfsmithError};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

/// Converts a lightweight plain-text document to PDF.
///
/// Blocks are separated by blank lines. A block whose lines all contain `|`
/// becomes a table, a block of the form `![alt](path)` embeds an image and
/// everything else is set as a paragraph.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Text file to convert
    input: PathBuf,

    /// Where to write the PDF
    #[arg(short, long, default_value = "output.pdf")]
    output: PathBuf,

    /// JSON builder configuration (backend, layout, info)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Overrides the backend named in the configuration
    #[arg(long)]
    backend: Option<String>,
}

enum Block<'a> {
    Paragraph(&'a str),
    Table(Vec<Vec<String>>),
    Image(&'a str),
}

fn parse_block(block: &str) -> Block<'_> {
    let trimmed = block.trim();
    if let Some(path) = trimmed
        .strip_prefix("![")
        .and_then(|rest| rest.split_once("]("))
        .and_then(|(_, rest)| rest.strip_suffix(')'))
    {
        return Block::Image(path);
    }
    if trimmed.lines().all(|line| line.contains('|')) {
        let rows = trimmed
            .lines()
            .map(|line| {
                line.trim_matches('|')
                    .split('|')
                    .map(|cell| cell.trim().to_string())
                    .collect()
            })
            .collect();
        return Block::Table(rows);
    }
    Block::Paragraph(block)
}

fn render(doc: &mut dyn DocumentBuilder, text: &str, base_dir: &Path) -> Result<(), PdfsmithError> {
    let normalized = text.replace("\r\n", "\n");
    for block in normalized.split("\n\n").filter(|b| !b.trim().is_empty()) {
        match parse_block(block) {
            Block::Paragraph(text) => doc.add_paragraph(text)?,
            Block::Table(rows) => doc.add_table(&rows)?,
            Block::Image(path) => {
                let data = fs::read(base_dir.join(path))?;
                doc.add_image(&data)?;
            }
        }
    }
    Ok(())
}

fn main() -> Result<(), PdfsmithError> {
    if env::var("RUST_LOG").is_err() {
        unsafe {
            env::set_var("RUST_LOG", "pdfsmith=info");
        }
    }
    env_logger::init();

    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => BuilderConfig::from_path(path)?,
        None => BuilderConfig::default(),
    };
    if let Some(backend) = args.backend {
        config.backend = backend;
    }
    println!("✓ Using backend: {}", config.backend);

    let text = fs::read_to_string(&args.input)?;
    let base_dir = args.input.parent().unwrap_or(Path::new("."));

    let mut doc = config.into_builder()?;
    let result = render(doc.as_mut(), &text, base_dir).and_then(|()| doc.save(&args.output).map_err(PdfsmithError::from));
    let pages = doc.page_count();
    doc.close();
    result?;

    println!("\nSuccess! Generated {} ({} page(s))", args.output.display(), pages);
    Ok(())
}
