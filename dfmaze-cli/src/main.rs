use std::path::PathBuf;

use clap::{ArgAction, Parser};
use dfmaze::{find_path, Generator, Pos};
use dfmaze_cli::{
    logging, parse_pos,
    render::{RenderStyle, Renderer},
    settings::{LogLevel, Settings},
    CliError,
};

#[derive(Parser, Debug)]
#[clap(version, author, about, name = "dfmaze")]
struct Args {
    #[clap(long, help = "Maze width, odd and at least 3")]
    width: Option<i32>,
    #[clap(long, help = "Maze height, odd and at least 3")]
    height: Option<i32>,
    #[clap(short, long, help = "Seed for the maze generator")]
    seed: Option<u64>,
    #[clap(long, value_parser = parse_pos, help = "Start as ROW,COL [default: 1,1]")]
    start: Option<Pos>,
    #[clap(long, value_parser = parse_pos, help = "End as ROW,COL [default: bottom right chamber]")]
    end: Option<Pos>,
    #[clap(long, action, help = "Don't draw the maze")]
    no_draw: bool,
    #[clap(long, action, help = "Don't print the path listing")]
    no_path: bool,
    #[clap(long, action, conflicts_with = "no_color", help = "Color the block drawing")]
    color: bool,
    #[clap(long, action, help = "Don't color the block drawing")]
    no_color: bool,
    #[clap(long, value_enum, help = "How to draw the maze")]
    style: Option<RenderStyle>,
    #[clap(short, long, help = "Use this settings file instead of the default one")]
    config: Option<PathBuf>,
    #[clap(long, action, help = "Show config path and quit")]
    show_config_path: bool,
    #[clap(short, long, action, help = "Reset config to default and quit")]
    reset_config: bool,
    #[clap(short, long, action = ArgAction::Count, help = "More logging, repeat for even more")]
    verbose: u8,
}

impl Args {
    fn apply(&self, mut settings: Settings) -> Settings {
        if let Some(width) = self.width {
            settings = settings.set_width(width);
        }
        if let Some(height) = self.height {
            settings = settings.set_height(height);
        }
        if let Some(seed) = self.seed {
            settings = settings.set_seed(seed);
        }
        if let Some(style) = self.style {
            settings = settings.set_style(style);
        }
        if self.no_draw {
            settings = settings.set_draw_maze(false);
        }
        if self.no_path {
            settings = settings.set_print_path(false);
        }
        if self.color {
            settings = settings.set_color(true);
        }
        if self.no_color {
            settings = settings.set_color(false);
        }
        if let Some(level) = LogLevel::from_verbosity(self.verbose) {
            settings = settings.set_log_level(level);
        }
        settings
    }
}

fn main() -> Result<(), CliError> {
    let args = Args::parse();
    let settings_path = args.config.clone().unwrap_or_else(Settings::default_path);

    if args.show_config_path {
        if let Some(s) = settings_path.to_str() {
            println!("{}", s);
        } else {
            println!("{:?}", settings_path);
        }
        return Ok(());
    }

    if args.reset_config {
        Settings::reset_config(&settings_path)?;
        return Ok(());
    }

    better_panic::install();

    let early_level = LogLevel::from_verbosity(args.verbose).unwrap_or_default();
    if logging::init(early_level.into()).is_err() {
        eprintln!("logger already initialized");
    }

    let settings = args.apply(Settings::load(&settings_path)?);
    logging::get_logger().set_min_level(settings.get_log_level().into());

    let generator = Generator::new(settings.get_seed());
    if settings.get_seed().is_none() {
        println!("Seed: {}", generator.seed());
    }

    let maze = generator.generate(settings.get_width(), settings.get_height())?;
    let (default_start, default_end) = maze.default_endpoints();
    let start = args.start.unwrap_or(default_start);
    let end = args.end.unwrap_or(default_end);

    let renderer = Renderer::new(settings.render_config());
    match find_path(&maze, start, end)? {
        Some(path) => {
            log::info!("path has {} cells", path.len());
            println!("Path found:");
            print!("{}", renderer.print_path(&maze, &path));
            print!("{}", renderer.draw(&maze, Some(&path)));
        }
        None => {
            println!("No path found.");
            print!("{}", renderer.draw(&maze, None));
        }
    }

    Ok(())
}
