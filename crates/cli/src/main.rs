mod session;

use anyhow::{anyhow, Context};
use config::{Config, File};
use hexplore::{
    timed, visible_set, Biome, Exploration, Explorer, FeatureDensity,
    GenerationConfig, HexEdit, HexPoint, HexRecord, MapCollection, MapState,
    NeighborSlot, Seed, Survey, TerrainDensity, WaterAmount,
};
use log::{info, LevelFilter};
use simple_logger::SimpleLogger;
use std::{
    fs::OpenOptions,
    io::{self, Write},
    path::{Path, PathBuf},
    process,
    str::FromStr,
};
use structopt::StructOpt;
use strum::{Display, EnumString};

/// CLI for generating and exploring hex maps. Every command operates on a
/// map collection file, which is created if it doesn't exist yet.
#[derive(Debug, StructOpt)]
#[structopt(name = "hexplore")]
struct Opt {
    /// Path to the map collection (JSON). If it doesn't exist, a collection
    /// with a single blank map is created.
    #[structopt(short, long, default_value = "hexplore.json")]
    file: PathBuf,

    /// Print command output as JSON instead of plain text
    #[structopt(long)]
    json: bool,

    /// The logging level to use. See
    /// https://docs.rs/log/0.4.11/log/enum.LevelFilter.html for options
    #[structopt(long, default_value = "info")]
    log_level: LevelFilter,

    #[structopt(subcommand)]
    command: Command,
}

#[derive(Debug, StructOpt)]
enum Command {
    /// Replace a map's hexes with a freshly generated map
    Generate {
        /// Path to a config file that defines the map to be generated.
        /// Supported formats: JSON, TOML. Any flags given below override
        /// values from the file.
        #[structopt(short, long)]
        config: Option<PathBuf>,

        /// Seed for generation. If not given (here or in the config file), a
        /// random seed is used.
        #[structopt(long)]
        seed: Option<String>,

        #[structopt(long)]
        cols: Option<u16>,

        #[structopt(long)]
        rows: Option<u16>,

        /// low, medium, or high
        #[structopt(long)]
        terrain_density: Option<TerrainDensity>,

        /// sparse, normal, or dense
        #[structopt(long)]
        feature_density: Option<FeatureDensity>,

        /// minimal, low, medium, or high
        #[structopt(long)]
        water_amount: Option<WaterAmount>,

        /// Map to replace. Defaults to the active map.
        #[structopt(long)]
        map: Option<String>,
    },

    /// Pick the starting hex on a map that hasn't been explored yet
    Start {
        #[structopt(long)]
        hex: HexPoint,

        #[structopt(flatten)]
        explorer: ExplorerOpt,
    },

    /// Explore a hex, generating its unknown neighbors
    Explore {
        #[structopt(long)]
        hex: HexPoint,

        /// What the hex turned out to be
        #[structopt(long)]
        biome: Biome,

        #[structopt(long, default_value = "")]
        feature: String,

        #[structopt(long, default_value = "")]
        notes: String,

        #[structopt(flatten)]
        explorer: ExplorerOpt,
    },

    /// Manually overwrite a hex. Fields that aren't given are left as-is.
    Edit {
        #[structopt(long)]
        hex: HexPoint,

        /// A biome, or "Unexplored"
        #[structopt(long)]
        biome: Option<BiomeArg>,

        #[structopt(long)]
        feature: Option<String>,

        #[structopt(long)]
        notes: Option<String>,
    },

    /// Print a hex and its six neighbors
    Show {
        #[structopt(long)]
        hex: HexPoint,
    },

    /// Print every hex that's currently visible
    Visible,

    /// Turn fog of war on or off. Toggles if no mode is given.
    Fog { mode: Option<FogMode> },

    /// Read commands from stdin, one per line, exploring with a single random
    /// stream. Run `help` inside the session for the command list.
    Session {
        #[structopt(flatten)]
        explorer: ExplorerOpt,
    },
}

/// Options for the exploration random stream
#[derive(Debug, StructOpt)]
struct ExplorerOpt {
    /// Seed for exploration. Every command starts the stream fresh; use
    /// `session` to keep one stream across many explores.
    #[structopt(long, default_value = "exploration-seed")]
    explorer_seed: String,

    /// Feature density for newly generated hexes: sparse, normal, or dense
    #[structopt(long, default_value = "normal")]
    explorer_density: FeatureDensity,
}

impl ExplorerOpt {
    fn build(&self) -> Explorer {
        Explorer::new(&self.explorer_seed)
            .with_feature_density(self.explorer_density)
    }
}

/// A biome for a manual edit, where "Unexplored" is also allowed
#[derive(Copy, Clone, Debug)]
struct BiomeArg(Option<Biome>);

impl FromStr for BiomeArg {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("unexplored") {
            Ok(Self(None))
        } else {
            let biome =
                s.parse().map_err(|_| anyhow!("unknown biome {:?}", s))?;
            Ok(Self(Some(biome)))
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Display, EnumString)]
#[strum(serialize_all = "snake_case")]
enum FogMode {
    On,
    Off,
}

/// The loaded collection plus where it goes when we're done
struct App {
    path: PathBuf,
    collection: MapCollection,
    json: bool,
}

impl App {
    fn load(path: PathBuf, json: bool) -> anyhow::Result<Self> {
        let collection = if path.exists() {
            let contents = std::fs::read_to_string(&path)
                .with_context(|| format!("error reading {:?}", path))?;
            let collection = MapCollection::from_json(&contents)
                .with_context(|| format!("error loading {:?}", path))?;
            info!(
                "Loaded {} map(s) from {:?}, active map is {:?}",
                collection.maps.len(),
                path,
                collection.active_map
            );
            collection
        } else {
            info!("{:?} doesn't exist, starting a new collection", path);
            MapCollection::default()
        };
        Ok(Self {
            path,
            collection,
            json,
        })
    }

    fn save(&self) -> anyhow::Result<()> {
        timed!(format!("Writing to {:?}", &self.path), log::Level::Info, {
            let json = self.collection.to_json()?;
            let mut file = OpenOptions::new()
                .write(true)
                .create(true)
                .truncate(true)
                .open(&self.path)
                .with_context(|| {
                    format!("error opening output file {:?}", &self.path)
                })?;
            file.write_all(json.as_bytes()).with_context(|| {
                format!("error writing to file {:?}", &self.path)
            })?;
        });
        Ok(())
    }

    fn map(&self) -> anyhow::Result<&MapState> {
        self.collection.active_map()
    }

    fn generate(
        &mut self,
        config: GenerationConfig,
        map_name: Option<String>,
    ) -> anyhow::Result<()> {
        let name =
            map_name.unwrap_or_else(|| self.collection.active_map.clone());
        let map = self
            .collection
            .maps
            .get_mut(&name)
            .ok_or_else(|| anyhow!("no map named {:?}", name))?;
        *map = MapState::generate(&config)?;
        println!("Generated {:?} with seed {:?}", name, config.seed.as_str());
        Ok(())
    }

    fn start(
        &mut self,
        explorer: &mut Explorer,
        point: HexPoint,
    ) -> anyhow::Result<()> {
        let map = self.collection.active_map_mut()?;
        let exploration = explorer.start_at(map, point)?;
        self.print_exploration(&exploration)
    }

    fn explore(
        &mut self,
        explorer: &mut Explorer,
        point: HexPoint,
        survey: Survey,
    ) -> anyhow::Result<()> {
        let map = self.collection.active_map_mut()?;
        match explorer.explore(map, point, survey)? {
            Some(exploration) => self.print_exploration(&exploration),
            None => {
                println!("{} is already explored", point);
                Ok(())
            }
        }
    }

    fn edit(
        &mut self,
        point: HexPoint,
        biome: Option<BiomeArg>,
        feature: Option<String>,
        notes: Option<String>,
    ) -> anyhow::Result<()> {
        let map = self.collection.active_map_mut()?;
        let current = map.get(point).cloned().unwrap_or_default();
        let edit = HexEdit {
            biome: biome.map_or(current.biome(), |biome| biome.0),
            feature: feature.unwrap_or_else(|| current.feature().to_owned()),
            notes: notes.unwrap_or_else(|| current.notes().to_owned()),
        };
        let hex = map.edit_hex(point, edit)?;
        println!("{}", describe(point, hex));
        Ok(())
    }

    fn show(&self, point: HexPoint) -> anyhow::Result<()> {
        let map = self.map()?;
        map.grid().ensure_contains(point)?;
        let hex = map.get(point);
        if self.json {
            println!("{}", serde_json::to_string_pretty(&hex)?);
            return Ok(());
        }

        match hex {
            Some(hex) => {
                println!("{}", describe(point, hex));
                if !hex.notes().is_empty() {
                    println!("  notes: {}", hex.notes());
                }
            }
            None => println!("{} (unknown)", point),
        }
        for (direction, slot) in &map.neighborhood(point) {
            let text = match slot {
                NeighborSlot::Edge => "-".to_owned(),
                NeighborSlot::Unknown => "?".to_owned(),
                NeighborSlot::Known(hex) => biome_name(hex),
            };
            println!("  {:<2} {}", direction.to_string(), text);
        }
        Ok(())
    }

    fn visible(&self) -> anyhow::Result<()> {
        let map = self.map()?;
        let mut visible: Vec<HexPoint> =
            visible_set(map, self.collection.exploration_mode)
                .into_iter()
                .collect();
        visible.sort_by_key(|point| (point.row(), point.col()));
        if self.json {
            println!("{}", serde_json::to_string(&visible)?);
        } else {
            let keys: Vec<String> =
                visible.iter().map(HexPoint::to_string).collect();
            println!("{}", keys.join(" "));
        }
        Ok(())
    }

    fn fog(&mut self, mode: Option<FogMode>) {
        let enabled = match mode {
            Some(FogMode::On) => {
                self.collection.set_exploration_mode(true);
                true
            }
            Some(FogMode::Off) => {
                self.collection.set_exploration_mode(false);
                false
            }
            None => self.collection.toggle_exploration_mode(),
        };
        println!("Fog of war: {}", if enabled { "on" } else { "off" });
    }

    fn print_exploration(
        &self,
        exploration: &Exploration,
    ) -> anyhow::Result<()> {
        if self.json {
            println!("{}", serde_json::to_string_pretty(exploration)?);
        } else {
            println!(
                "Explored {}",
                describe(exploration.point, &exploration.updated)
            );
            for (point, hex) in &exploration.generated {
                println!("  new {}", describe(*point, hex));
            }
        }
        Ok(())
    }
}

fn biome_name(hex: &HexRecord) -> String {
    hex.biome()
        .map_or_else(|| "Unexplored".to_owned(), |biome| biome.to_string())
}

/// One-line summary of a hex
fn describe(point: HexPoint, hex: &HexRecord) -> String {
    let mut text = format!("{} {}", point, biome_name(hex));
    if !hex.feature().is_empty() {
        text.push_str(&format!(" ({})", hex.feature()));
    }
    if hex.explored() {
        text.push_str(" *");
    }
    text
}

fn load_config(config_path: &Path) -> anyhow::Result<GenerationConfig> {
    // Load config
    let mut settings = Config::new();
    let config_path = config_path.to_str().ok_or_else(|| {
        anyhow!("invalid character in path {:?}", config_path)
    })?;
    settings
        .merge(File::with_name(config_path))
        .context("error reading config file")?;
    settings.try_into().context("error reading config")
}

/// Run the CLI with some options
fn run(opt: Opt) -> anyhow::Result<()> {
    SimpleLogger::new().with_level(opt.log_level).init()?;

    let mut app = App::load(opt.file, opt.json)?;
    match opt.command {
        Command::Generate {
            config,
            seed,
            cols,
            rows,
            terrain_density,
            feature_density,
            water_amount,
            map,
        } => {
            let mut config = match config {
                Some(path) => load_config(&path)?,
                None => GenerationConfig::default(),
            };
            if let Some(seed) = seed {
                config.seed = Seed::from(seed);
            }
            config.cols = cols.unwrap_or(config.cols);
            config.rows = rows.unwrap_or(config.rows);
            config.terrain_density =
                terrain_density.unwrap_or(config.terrain_density);
            config.feature_density =
                feature_density.unwrap_or(config.feature_density);
            config.water_amount = water_amount.unwrap_or(config.water_amount);
            app.generate(config, map)?;
        }
        Command::Start { hex, explorer } => {
            app.start(&mut explorer.build(), hex)?;
        }
        Command::Explore {
            hex,
            biome,
            feature,
            notes,
            explorer,
        } => {
            let survey = Survey {
                biome,
                feature,
                notes,
            };
            app.explore(&mut explorer.build(), hex, survey)?;
        }
        Command::Edit {
            hex,
            biome,
            feature,
            notes,
        } => app.edit(hex, biome, feature, notes)?,
        // Read-only commands don't need to save
        Command::Show { hex } => return app.show(hex),
        Command::Visible => return app.visible(),
        Command::Fog { mode } => app.fog(mode),
        Command::Session { explorer } => {
            let stdin = io::stdin();
            session::run(&mut app, explorer.build(), stdin.lock())?;
        }
    }

    app.save()
}

fn main() {
    let exit_code = match run(Opt::from_args()) {
        Ok(_) => 0,
        Err(err) => {
            eprintln!("Error: {:#}", err);
            1
        }
    };
    process::exit(exit_code);
}
