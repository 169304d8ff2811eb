use std::time::Duration;

use anyhow::{bail, Context, Result};
use bridge::OpenTdbFetcher;
use clap::Parser;
use crossbeam_channel::{bounded, Receiver};
use plugin_core::{Session, SessionEvent, SubmitOutcome};
use shared::{
    domain::{RawParameters, TriviaResponse},
    error::{ErrorCode, SessionException},
    protocol::{BridgeReply, BridgeRequest},
};
use tracing::{info, warn};

mod config;

use config::load_settings;

/// Fetch trivia questions through the sandboxed plugin core.
#[derive(Parser, Debug)]
struct Args {
    /// How many questions to fetch (the suggestion list offers 5..30).
    #[arg(long)]
    number: Option<String>,
    /// Category name as typed; resolved through the suggestion list.
    #[arg(long)]
    category: Option<String>,
    /// easy, medium, or hard.
    #[arg(long)]
    difficulty: Option<String>,
    /// "multiple choice" or "true/false".
    #[arg(long = "type")]
    kind: Option<String>,
    /// Print suggestions for `field=query` and exit.
    #[arg(long)]
    suggest: Option<String>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt().with_env_filter("info").init();
    let args = Args::parse();
    let settings = load_settings();

    let (request_tx, request_rx) = bounded::<BridgeRequest>(8);
    let (reply_tx, reply_rx) = bounded::<BridgeReply>(8);
    let fetcher = OpenTdbFetcher::new(&settings.category_url)?;
    let _bridge_worker = bridge::spawn(fetcher, request_rx, reply_tx);

    let reply_timeout = Duration::from_secs(settings.reply_timeout_secs);
    let mut session = Session::new(&settings.api_base_url);

    request_tx
        .send(session.start())
        .context("bridge request channel closed")?;
    let reply = recv_reply(&reply_rx, reply_timeout, "category")?;
    if let SessionEvent::CategoriesLoaded { count } = session.handle_reply(reply) {
        info!(count, "category list loaded");
    }

    if let Some(selector) = &args.suggest {
        return run_suggest(&session, selector);
    }

    let raw = collect_parameters(&session, &args);
    let request = match session.submit(&raw) {
        SubmitOutcome::Fetch(request) => request,
        SubmitOutcome::Rejected { notification } => {
            eprintln!("{notification}");
            return Ok(());
        }
        SubmitOutcome::Ignored => bail!("session was not ready for parameters"),
    };
    request_tx
        .send(request)
        .context("bridge request channel closed")?;

    let reply = recv_reply(&reply_rx, reply_timeout, "question")?;
    match session.handle_reply(reply) {
        SessionEvent::Completed(response) => print_questions(&response),
        event => warn!(?event, "unexpected reply while awaiting questions"),
    }

    Ok(())
}

fn recv_reply(
    replies: &Receiver<BridgeReply>,
    timeout: Duration,
    waiting_for: &str,
) -> Result<BridgeReply, SessionException> {
    replies.recv_timeout(timeout).map_err(|_| {
        SessionException::new(
            ErrorCode::Transport,
            format!(
                "no {waiting_for} reply from the bridge within {}s",
                timeout.as_secs()
            ),
        )
    })
}

/// Turn the typed CLI values into the raw parameter set the way the host
/// parameter UI would: an exact or unambiguous suggestion match submits the
/// suggestion's value, anything else is submitted as typed.
fn collect_parameters(session: &Session, args: &Args) -> RawParameters {
    let category = args.category.as_deref().and_then(|typed| {
        let resolved = resolve_value(session, "category", typed);
        match resolved.parse::<i64>() {
            Ok(id) => Some(id),
            Err(_) => {
                warn!(category = typed, "no matching category; ignoring the selection");
                None
            }
        }
    });

    RawParameters {
        number: args
            .number
            .as_deref()
            .map(|typed| resolve_value(session, "number", typed)),
        category,
        difficulty: args
            .difficulty
            .as_deref()
            .map(|typed| resolve_value(session, "difficulty", typed)),
        kind: args
            .kind
            .as_deref()
            .map(|typed| resolve_value(session, "type", typed)),
    }
}

fn resolve_value(session: &Session, field: &str, typed: &str) -> String {
    let Some(list) = session.suggestions(field, typed) else {
        return typed.to_string();
    };
    if let Some(exact) = list.iter().find(|suggestion| suggestion.label == typed) {
        return exact.value.clone();
    }
    if list.len() == 1 {
        return list[0].value.clone();
    }
    typed.to_string()
}

fn run_suggest(session: &Session, selector: &str) -> Result<()> {
    let (field, query) = selector.split_once('=').unwrap_or((selector, ""));
    match session.suggestions(field, query) {
        Some(list) if list.is_empty() => println!("no matches for '{query}' in field '{field}'"),
        Some(list) => {
            for suggestion in list {
                println!("{} -> {}", suggestion.label, suggestion.value);
            }
        }
        None => println!("unknown field '{field}' (expected number, category, difficulty, or type)"),
    }
    Ok(())
}

fn print_questions(response: &TriviaResponse) {
    if response.response_code != 0 {
        println!(
            "API response code {}; no questions returned.",
            response.response_code
        );
        return;
    }
    for (index, question) in response.results.iter().enumerate() {
        println!(
            "{}. [{} / {}] {}",
            index + 1,
            question.category,
            question.difficulty,
            question.question
        );
        println!("   answer: {}", question.correct_answer);
        if !question.incorrect_answers.is_empty() {
            println!("   incorrect: {}", question.incorrect_answers.join(", "));
        }
    }
}
