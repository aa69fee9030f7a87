use clap::Parser;
use convosite::builder::{Builder, Notification, NotificationKind};
use convosite::chat::ChatSession;
use convosite::render;
use convosite::seed::SeedData;
use convosite::store::Latency;
use tokio::sync::mpsc;

mod args;
use args::Args;

#[tokio::main]
async fn main() {
    // Initialize logging
    env_logger::init();

    // Parse command-line arguments
    let args = Args::parse();

    // Load the seed collections
    let seed = match &args.seed {
        Some(path) => SeedData::from_file(path),
        None => SeedData::demo(),
    };
    let seed = match seed {
        Ok(seed) => seed,
        Err(e) => {
            ::log::error!("Failed to load seed data: {}", e);
            return;
        }
    };
    ::log::info!(
        "Loaded seed data: {} sites, {} pages, {} components",
        seed.sites.len(),
        seed.pages.len(),
        seed.components.len()
    );

    // Print notification events as they arrive
    let (tx, mut rx) = mpsc::unbounded_channel::<Notification>();
    let printer = tokio::spawn(async move {
        while let Some(notification) = rx.recv().await {
            let tag = match notification.kind {
                NotificationKind::Success => "ok",
                NotificationKind::Error => "error",
            };
            println!("[{}] {}", tag, notification.message);
        }
    });

    let mut builder = Builder::from_seed(seed).with_notifications(tx);
    if args.no_delay {
        builder = builder.with_latency(Latency::off());
    }

    // Load the site and render its current page
    let data = match builder.load_for_site(args.site).await {
        Ok(data) => data,
        Err(e) => {
            ::log::error!("Failed to load site {}: {}", args.site, e);
            return;
        }
    };

    println!("# {} ({})", data.site.name, data.site.domain);
    match &data.current_page {
        Some(page) => println!("## Page: {} ({} components)\n", page.title, data.components.len()),
        None => println!("## No pages yet\n"),
    }
    println!("{}", render::page(&data.components));

    // Run the scripted chat transcript, if any
    if !args.chat.is_empty() {
        let mut session = ChatSession::new();
        if args.no_delay {
            session = session.without_thinking_delay();
        }
        println!("\n--- chat ---");
        for message in session.messages() {
            println!("assistant: {}", message.text);
        }
        for input in &args.chat {
            println!("you: {}", input);
            let reply = session.send(input, &data.components).await;
            println!("assistant: {}", reply.text);
        }
    }

    // Close the notification channel so the printer task drains and exits
    drop(builder);
    let _ = printer.await;
}
