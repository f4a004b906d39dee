use std::path::PathBuf;

use clap::Parser;
use localscribe::{TranscribeOptions, Transcriber};

#[derive(Parser, Debug)]
#[command(
    name = "localscribe",
    about = "Transcribe an audio file with a local Whisper model and print JSON"
)]
struct Cli {
    /// Path to the audio file to transcribe.
    audio_file: PathBuf,

    /// Language code hint (e.g. "ur", "en") or "auto" for detection.
    #[arg(default_value = "ur")]
    language: String,
}

#[tokio::main]
async fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            // Usage errors exit 1; --help/--version go to stdout and exit 0
            let is_usage = e.use_stderr();
            let _ = e.print();
            std::process::exit(if is_usage { 1 } else { 0 });
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("localscribe=info".parse().unwrap()),
        )
        .with_writer(std::io::stderr)
        .init();

    let options = match TranscribeOptions::new().language(&cli.language) {
        Ok(opts) => opts,
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    };

    eprintln!("Loading Whisper model...");
    let transcriber = match Transcriber::new(options).await {
        Ok(t) => t,
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    };

    eprintln!("Transcribing: {}", cli.audio_file.display());
    let transcript = match transcriber.transcribe(&cli.audio_file) {
        Ok(t) => t,
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    };

    match transcript.to_json_pretty() {
        Ok(json) => println!("{json}"),
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_audio_file_is_a_usage_error() {
        let err = Cli::try_parse_from(["localscribe"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::MissingRequiredArgument);
        assert!(err.use_stderr());
    }

    #[test]
    fn test_language_defaults_to_urdu() {
        let cli = Cli::try_parse_from(["localscribe", "speech.mp3"]).unwrap();
        assert_eq!(cli.audio_file, PathBuf::from("speech.mp3"));
        assert_eq!(cli.language, "ur");
    }

    #[test]
    fn test_explicit_language_overrides_default() {
        let cli = Cli::try_parse_from(["localscribe", "speech.mp3", "en"]).unwrap();
        assert_eq!(cli.language, "en");
    }
}
