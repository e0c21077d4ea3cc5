use reposplat::cli::commands::run;

fn main() -> anyhow::Result<()> {
    run()
}
