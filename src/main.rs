use clap::{
    crate_authors, crate_description, crate_name, crate_version, Arg, ArgAction, Command,
};
use fitout::ProjectType;
use std::path::{Path, PathBuf};

// The CLI layer only parses inputs, sets up logging, and forwards to library
// code; the selector is validated by hand so that a missing or unknown value
// exits with status 1 before anything on disk is touched.
fn main() -> miette::Result<()> {
    let matches = Command::new(crate_name!())
        .about(crate_description!())
        .author(crate_authors!())
        .version(crate_version!())
        .arg(Arg::new("type").help("project type to set up: doc, xwalk or da"))
        .arg(
            Arg::new("root")
                .long("root")
                .value_name("DIR")
                .help("project root to set up (defaults to the current directory)")
                .default_value("."),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Enable verbose output")
                .action(ArgAction::SetTrue),
        )
        .get_matches();

    let is_verbose = matches.get_flag("verbose");

    let env = env_logger::Env::default()
        .default_filter_or(if is_verbose { "debug" } else { "info" });
    env_logger::Builder::from_env(env).init();

    let project_type = match matches.get_one::<String>("type") {
        Some(raw) => raw.parse::<ProjectType>().unwrap_or_else(|error| {
            eprintln!("{:?}", miette::Report::new(error));
            std::process::exit(1);
        }),
        None => {
            eprintln!("please specify a project type: 'doc', 'xwalk' or 'da'");
            std::process::exit(1);
        }
    };

    let root = PathBuf::from(matches.get_one::<String>("root").expect("has a default"));
    let artifact = vendored_artifact(&root);

    fitout::initialize(&root, project_type, artifact.as_deref())?;

    Ok(())
}

// Resolves the running executable to the vendored copy committed inside the
// checkout. A binary living outside the project root is not the vendored
// copy and must survive the run.
fn vendored_artifact(root: &Path) -> Option<PathBuf> {
    let exe = std::env::current_exe().ok()?.canonicalize().ok()?;
    let root = root.canonicalize().ok()?;

    exe.starts_with(&root).then_some(exe)
}
