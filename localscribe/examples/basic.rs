//! Transcribe a local audio file and print the JSON transcript.
//!
//! Usage: cargo run --example basic -- path/to/audio.mp3 [language]

#[tokio::main]
async fn main() -> localscribe::Result<()> {
    let mut args = std::env::args().skip(1);
    let path = args.next().expect("usage: basic <audio-file> [language]");
    let language = args.next().unwrap_or_else(|| "ur".into());

    let transcript = localscribe::transcribe_file(&path, &language).await?;

    println!("{}", transcript.to_json_pretty()?);

    Ok(())
}
