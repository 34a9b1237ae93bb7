use simpleargs::{parse_env_or_exit, ArgOptions, ArgValue, ArgsError, ArgsInitializer};

fn main() -> Result<(), ArgsError> {
    let initializer = ArgsInitializer::with_layout("Serve files from a directory.", 30, 40)?
        .value_with(
            "root, r",
            "Directory to serve.",
            ArgValue::<String>::new(),
            ArgOptions::new().required(),
        )?
        .value(
            "port, p",
            "Port to listen on.",
            ArgValue::<u16>::new().with_default(8080),
        )?
        .value("workers", "Number of worker threads.", ArgValue::<u8>::new())?
        .flag("verbose, v", "Log every request.")?
        .fit_terminal();

    let args = parse_env_or_exit(&initializer);
    let root: String = args.get("--root")?;
    let port: u16 = args.get("-p")?;

    println!("Serving {root} on port {port}.");

    if args.exists("--workers") {
        println!("Workers: {}", args.get::<u8>("--workers")?);
    }

    if args.exists("-v") {
        println!("Verbose logging enabled.");
    }

    Ok(())
}
