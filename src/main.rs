use anyhow::Result;

fn main() -> Result<()> {
    podcast_browser::cli::run()
}
