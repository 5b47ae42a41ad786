//! cloudtool - lay out the sample topic cloud and print the placements.
//!
//! A thin demonstration harness around `nimbus_core`: the topic set is a
//! canned in-memory list (the engine takes no other data source), the
//! measurement surface is the deterministic character grid, and the output
//! is one line per placed word as text or JSON.

use anyhow::Result;
use clap::{Parser, ValueEnum};
use nimbus_core::geom::Container;
use nimbus_core::layout::{BoundsMode, CloudParams, WordLayoutEngine};
use nimbus_core::measure::CharGridMeasure;
use nimbus_core::model::{Selection, TopicItem};
use serde_json::json;

/// Output format for the computed layout.
#[derive(Debug, Clone, Copy, ValueEnum, Default)]
enum OutputType {
    /// One aligned text row per placed word (default)
    #[default]
    Text,
    /// A JSON array of placement objects
    Json,
}

/// In-bounds test variant.
#[derive(Debug, Clone, Copy, ValueEnum, Default)]
enum BoundsArg {
    /// Loose test (words may overhang the left and top edges)
    #[default]
    Legacy,
    /// Every word fully inside the container
    Contained,
}

impl From<BoundsArg> for BoundsMode {
    fn from(arg: BoundsArg) -> Self {
        match arg {
            BoundsArg::Legacy => BoundsMode::Legacy,
            BoundsArg::Contained => BoundsMode::Contained,
        }
    }
}

/// Lay out the built-in sample topic cloud and print the placements.
#[derive(Parser, Debug)]
#[command(name = "cloudtool")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Container width in layout units
    #[arg(long, default_value = "400")]
    width: f64,

    /// Container height in layout units
    #[arg(long, default_value = "400")]
    height: f64,

    /// Output format
    #[arg(short = 't', long = "output", value_enum, default_value = "text")]
    output: OutputType,

    /// In-bounds test variant
    #[arg(short = 'b', long, value_enum, default_value = "legacy")]
    bounds: BoundsArg,

    /// Mark this topic id as selected in the output
    #[arg(short = 's', long)]
    select: Option<String>,

    /// Character advance of the stub measurement surface, relative to font size
    #[arg(long = "char-width", default_value = "0.6")]
    char_width: f64,

    /// Line height of the stub measurement surface, relative to font size
    #[arg(long = "line-height", default_value = "1.2")]
    line_height: f64,

    /// Only lay out the first N sample topics
    #[arg(short = 'n', long)]
    limit: Option<usize>,
}

/// The canned sample set: id, label, volume, sentiment score.
fn sample_topics() -> Vec<TopicItem> {
    [
        ("t01", "coffee", 165.0, 72.0),
        ("t02", "commute", 120.0, 22.0),
        ("t03", "weather", 98.0, 50.0),
        ("t04", "weekend", 84.0, 81.0),
        ("t05", "deadline", 77.0, 18.0),
        ("t06", "lunch", 63.0, 66.0),
        ("t07", "meeting", 58.0, 40.0),
        ("t08", "holiday", 55.0, 90.0),
        ("t09", "traffic", 49.0, 12.0),
        ("t10", "garden", 41.0, 74.0),
        ("t11", "invoice", 38.0, 35.0),
        ("t12", "release", 33.0, 61.0),
        ("t13", "gym", 27.0, 59.0),
        ("t14", "podcast", 24.0, 68.0),
        ("t15", "laundry", 19.0, 44.0),
        ("t16", "recipe", 14.0, 77.0),
        ("t17", "puzzle", 9.0, 64.0),
        ("t18", "umbrella", 5.0, 39.0),
    ]
    .into_iter()
    .map(|(id, label, volume, score)| TopicItem::new(id, label, volume, score))
    .collect()
}

fn main() -> Result<()> {
    let args = Args::parse();

    let mut topics = sample_topics();
    if let Some(limit) = args.limit {
        topics.truncate(limit);
    }

    let params = CloudParams {
        bounds: args.bounds.into(),
        ..CloudParams::default()
    };
    let engine = WordLayoutEngine::new(params)?;
    let measure = CharGridMeasure::new(args.char_width, args.line_height);
    let container = Container::sized(args.width, args.height);

    let placed = engine.compute_layout(&topics, container, &measure)?;

    let mut selection = Selection::none();
    if let Some(id) = &args.select {
        selection.select(id.clone());
    }

    match args.output {
        OutputType::Text => {
            for word in &placed {
                let marker = if selection.is_selected(word) { "*" } else { " " };
                println!(
                    "{marker} {id:<5} {label:<12} {font:>5.1}px {category:<8} \
                     left={left:>8.2} top={top:>8.2} w={w:>7.2} h={h:>6.2}",
                    id = word.id,
                    label = word.label,
                    font = word.font_size,
                    category = word.category.as_str(),
                    left = word.rect.left,
                    top = word.rect.top,
                    w = word.rect.width(),
                    h = word.rect.height(),
                );
            }
        }
        OutputType::Json => {
            let rows: Vec<_> = placed
                .iter()
                .map(|word| {
                    json!({
                        "id": word.id,
                        "label": word.label,
                        "fontSize": word.font_size,
                        "category": word.category.as_str(),
                        "left": word.rect.left,
                        "top": word.rect.top,
                        "right": word.rect.right,
                        "bottom": word.rect.bottom,
                        "selected": selection.is_selected(word),
                    })
                })
                .collect();
            println!("{}", serde_json::to_string_pretty(&rows)?);
        }
    }

    let dropped = topics.len() - placed.len();
    if dropped > 0 {
        eprintln!("{dropped} of {} topics did not fit and were dropped", topics.len());
    }

    Ok(())
}
