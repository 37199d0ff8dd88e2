// src/config/consts.rs

// Net config
pub const BASE_URL: &str = "https://globalgamejam.org";
pub const LISTING_QUERY: &str = "title=&country=All&city=&tools=All&diversifier=All&platforms=All";
pub const USER_AGENT: &str = concat!("ggj_scrape/", env!("CARGO_PKG_VERSION"));
pub const REQUEST_TIMEOUT_SECS: u64 = 30;

// Concurrency
pub const BATCH_SIZE: usize = 100; // in-flight ceiling per batch

// Files
pub const DEFAULT_URL_LIST: &str = "url-list.txt";
pub const DEFAULT_GAMES_FILE: &str = "games-data.json";
pub const DEFAULT_ANALYSIS_DIR: &str = "out/analysis";

// Analysis
pub const ENGINE_MIN_GAMES: usize = 100; // below this an engine lands in "Others"
pub const COUNTRY_MIN_ENTRIES: usize = 5; // countries need more than this many
pub const OTHERS: &str = "Others";

pub const ENGINES: &[&str] = &[
    "A-Frame",
    "Adventure Game Studio",
    "Bitsy game maker",
    "Clickteam Fusion",
    "Cocos 2D",
    "Construct",
    "Corona SDK",
    "CryEngine",
    "Defold",
    "Enchant.JS",
    "Game Salad (Mac desktop, iPhone, iPad)",
    "GameMaker (any product)",
    "Godot Engine",
    "Greenfoot",
    "Haxe",
    "Houdini",
    "Inform",
    "Intel XDK",
    "LibGDX",
    "Play Canvas",
    "Processing",
    "Puzzlescript",
    "RPG Maker",
    "Ren/Py",
    "SDL",
    "Scratch",
    "Stencyl",
    "Tabletop Technology",
    "Unity (any product)",
    "Unreal Engine",
    "Xenko",
];

pub const DIMENSIONS: &[&str] = &["2D", "2.5D", "3D"];

// Territories folded into a neighbour that the world map actually draws.
pub const TERRITORY_REMAP: &[(&str, &str)] = &[
    ("BHR", "SAU"),
    ("GGY", "GBR"),
    ("HKG", "CHN"),
    ("MLT", "ITA"),
    ("MUS", "MDG"),
    ("REU", "FRA"),
    ("SGP", "MYS"),
];
