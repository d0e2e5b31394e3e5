//! Handler for the generate command.

use crate::cli::{GenerateArgs, OutputFormat};
use lautrec_core::{GeneratedContent, GenerationBrief, Platform, PlatformSelection};
use lautrec_models::{GeminiComposer, GeminiPainter, LautrecConfig};
use lautrec_studio::{ScheduleBoard, Studio};

/// Generate posts per the CLI arguments, then optionally simulate scheduling.
pub async fn run_generate(args: GenerateArgs) -> Result<(), Box<dyn std::error::Error>> {
    let excerpt = match (&args.excerpt, &args.file) {
        (Some(text), _) => text.clone(),
        (None, Some(path)) => std::fs::read_to_string(path)?,
        (None, None) => return Err("provide an excerpt via --excerpt or --file".into()),
    };

    let selection = if args.all {
        PlatformSelection::all()
    } else {
        PlatformSelection {
            linkedin: args.linkedin,
            facebook: args.facebook,
            twitter: args.twitter,
            graphic_text: args.graphic,
        }
    };

    let config = LautrecConfig::load()?;
    let composer = GeminiComposer::with_config(&config.composer)?;
    let painter = GeminiPainter::with_config(&config.painter)?;
    let studio = Studio::new(composer, painter);

    let content = studio
        .generate(GenerationBrief::new(excerpt, selection))
        .await?;

    if !args.no_image && studio.is_painting().await {
        println!("Text ready; painting graphic...");
        studio.settle().await;
    }

    // Re-read the stored result so a merged image is included.
    let content = studio.content().await.unwrap_or(content);

    match args.format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&content)?),
        OutputFormat::Human => print_content(&content),
    }

    if let Some(time) = args.schedule_at {
        let board = ScheduleBoard::new();
        for (platform, text) in post_texts(&content) {
            board.schedule(platform, text, time).await;
        }
        print_board(&board).await;
    }

    Ok(())
}

/// The literal text that represents each generated post.
fn post_texts(content: &GeneratedContent) -> Vec<(Platform, String)> {
    let mut posts = Vec::new();
    if let Some(post) = &content.linkedin_post {
        posts.push((Platform::LinkedIn, post.copy.clone()));
    }
    if let Some(post) = &content.facebook_post {
        posts.push((Platform::Facebook, post.copy.clone()));
    }
    if let Some(post) = &content.twitter_post {
        posts.push((Platform::Twitter, post.copy.clone()));
    }
    if let Some(graphic) = &content.graphic_text {
        posts.push((Platform::GraphicText, graphic.text.clone()));
    }
    posts
}

fn print_content(content: &GeneratedContent) {
    if let Some(post) = &content.linkedin_post {
        println!("== LinkedIn ==\n{}\n", post.copy);
    }
    if let Some(post) = &content.facebook_post {
        println!("== Facebook ==\n{}\n{}\n", post.copy, post.hashtags.join(" "));
    }
    if let Some(post) = &content.twitter_post {
        println!("== Twitter ==\n{}\n{}\n", post.copy, post.hashtags.join(" "));
    }
    if let Some(graphic) = &content.graphic_text {
        println!("== Graphic Text ==\n{}", graphic.text);
        match &graphic.image_url {
            Some(url) => println!("[image: {} bytes encoded]\n", url.len()),
            None => println!("[no image]\n"),
        }
    }
    if content.is_empty() {
        println!("No content was generated.");
    }
}

async fn print_board(board: &ScheduleBoard) {
    println!("== Scheduled Posts ==");
    for post in board.posts().await {
        let preview: String = post.content.chars().take(48).collect();
        println!(
            "{}  {:<12}  {}  {}",
            post.scheduled_time.to_rfc3339(),
            post.platform.to_string(),
            post.id,
            preview
        );
    }
}
