use cranmirror_lib::cli::{parse_args, resolve_command, run_download};
use cranmirror_lib::error::CranMirrorError;

#[tokio::main(flavor = "multi_thread")]
async fn main() -> Result<(), CranMirrorError> {
    color_eyre::install()?;

    let args = parse_args();
    let params = resolve_command(args.command)
        .inspect_err(|err| tracing::error!(error = %err, "could not prepare download run"))?;

    run_download(params)
        .await
        .inspect_err(|err| tracing::error!(error = %err, "could not set up downloads"))?;

    Ok(())
}
