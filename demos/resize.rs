use simpleargs::{parse_env_args, ArgValue, ArgsError, ArgsInitializer};

fn main() -> Result<(), ArgsError> {
    let initializer = ArgsInitializer::new()
        .describe("Scale an image by a factor.")
        .value("scale, s", "Scale factor.", ArgValue::<f32>::new().with_default(1.0))?
        .value("input, i", "Image to read.", ArgValue::<String>::new())?
        .flag("dry-run, n", "Print the plan without writing anything.")?;

    let args = match parse_env_args(&initializer) {
        Ok(args) => args,
        Err(error) => {
            eprintln!("{error}");
            print!("{}", initializer.help("resize"));
            std::process::exit(1);
        }
    };

    if args.help_requested() {
        print!("{}", args.help());
        return Ok(());
    }

    let scale: f32 = args.get("--scale")?;

    match args.get::<String>("-i") {
        Ok(input) => println!("Scaling {input} by {scale}."),
        Err(_) => println!("No input given; nothing to scale by {scale}."),
    }

    if args.exists("--dry-run") {
        println!("Dry run: nothing written.");
    }

    Ok(())
}
