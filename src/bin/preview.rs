use anyhow::{anyhow, Context, Result};
use clap::Parser;
use colored::Colorize;
use insurance_decoded::{assemble, Catalogue, RenderResult, THUMBNAIL_VARIANTS};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about = "Render one video package to stdout", long_about = None)]
struct Args {
    /// Index of the topic to render instead of drawing one
    #[arg(short = 't', long)]
    topic: Option<usize>,

    /// Index of the thumbnail variant to use instead of drawing one
    #[arg(short = 'v', long)]
    variant: Option<usize>,

    /// Seed for the random draws
    #[arg(short = 's', long)]
    seed: Option<u64>,

    /// JSON file replacing the built-in topic catalogue
    #[arg(short = 'f', long)]
    topics: Option<PathBuf>,

    /// Print the response body the server would send
    #[arg(short = 'j', long)]
    json: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let catalogue = match &args.topics {
        Some(path) => Catalogue::from_json_file(path)?,
        None => Catalogue::builtin().clone(),
    };

    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    let result = match (args.topic, args.variant) {
        (None, None) => catalogue.generate_with(&mut rng)?,
        (topic_index, variant_index) => {
            let topic = match topic_index {
                Some(index) => catalogue.topics().get(index).ok_or_else(|| {
                    anyhow!(
                        "topic index {} out of range (catalogue has {})",
                        index,
                        catalogue.len()
                    )
                })?,
                None => insurance_decoded::selector::select_topic(catalogue.topics(), &mut rng)
                    .context("catalogue has no topics")?,
            };
            let variant = match variant_index {
                Some(index) => THUMBNAIL_VARIANTS.get(index).ok_or_else(|| {
                    anyhow!(
                        "variant index {} out of range ({} variants)",
                        index,
                        THUMBNAIL_VARIANTS.len()
                    )
                })?,
                None => insurance_decoded::selector::select_variant(THUMBNAIL_VARIANTS, &mut rng)
                    .context("no thumbnail variants defined")?,
            };
            assemble(topic, variant)
        }
    };

    if args.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        print_sections(&result);
    }

    Ok(())
}

fn print_sections(result: &RenderResult) {
    let section = |name: &str, body: &str| {
        println!("\n{}", "═".repeat(80).bright_blue());
        println!("{}", name.bright_yellow());
        println!("{}", "═".repeat(80).bright_blue());
        println!("{}", body);
    };

    section("PRIMARY KEYWORD", &result.primary_keyword);
    section("SECONDARY KEYWORDS", &result.secondary_keywords.join(", "));
    section("TITLE", &result.title);
    section("SCRIPT", &result.script);
    section("VIDEO PROMPT", &result.video_prompt);
    section("THUMBNAIL PROMPT", &result.thumbnail_prompt);
    section("DESCRIPTION", &result.description);
    section("TAGS", &result.tags.join(", "));
    section("HASHTAGS", &result.hashtags.join(" "));
    section("CHAPTERS", &result.chapters.join("\n"));
}
