use log::LevelFilter;
use std::{fs, path::PathBuf};

use bootnav_lib::{
    menu::MenuRenderer,
    navtree::{NavConfig, NavTree},
};
use clap::Parser;
use log::{debug, warn};

#[derive(Parser, Debug)]
#[command(
    version = "0.1.0",
    about = "Render a Bootstrap dropdown navigation menu",
    long_about = "Render a Bootstrap dropdown navigation menu from a toml navigation config"
)]
struct Args {
    /// path to a toml navigation config file
    input: PathBuf,

    /// href of the page to mark as active
    #[clap(long, short)]
    active: Option<String>,

    /// only render the active page, its ancestors and siblings
    #[clap(long)]
    only_active: bool,

    /// render top level parents as real hyperlinks instead of dropdown toggles
    #[clap(long)]
    parents_are_links: bool,

    /// depth at which to start rendering
    #[clap(long)]
    min_depth: Option<usize>,

    /// deepest level to render
    #[clap(long)]
    max_depth: Option<usize>,

    /// css class for the top level <ul>
    #[clap(long)]
    ul_class: Option<String>,

    /// "TRACE", "DEBUG", "INFO", "WARN", "ERROR"
    #[clap(long, short)]
    log: Option<LevelFilter>,
}

fn main() {
    let args: Args = Args::parse();
    env_logger::Builder::new()
        .filter_level(args.log.unwrap_or(LevelFilter::Warn))
        .init();

    let raw = fs::read_to_string(&args.input).expect("failed to read input");
    let config = NavConfig::from_toml(&raw).expect("failed to parse navigation config");

    let mut options = config.menu.clone();
    options.only_active |= args.only_active;
    options.parents_are_links |= args.parents_are_links;
    if let Some(min_depth) = args.min_depth {
        options.min_depth = min_depth;
    }
    if args.max_depth.is_some() {
        options.max_depth = args.max_depth;
    }
    if let Some(ul_class) = args.ul_class {
        options.ul_class = ul_class;
    }

    let mut tree = NavTree::from_config(config.pages);
    if let Some(href) = &args.active {
        match tree.find_by_href(href) {
            Some(id) => tree.activate(id),
            None => warn!("no page with href {href:?}"),
        }
    }
    debug!("NavTree:\n{tree}");

    let renderer = MenuRenderer::new(options);
    let html = renderer.render(&tree).expect("failed to render menu");
    println!("{html}");
}
