// UI Constants
pub const HEAVY_VERTICAL: char = '┃';
pub const LIGHT_VERTICAL: char = '│';
pub const BUBBLE_TOP: &str = "┌─";
pub const BUBBLE_BOTTOM: &str = "╰─";
pub const USER_INDENT: &str = "  ";

pub const MISSION_ICON: char = '◆';
pub const DOCUMENT_ICON: char = '▤';
pub const GENERIC_ICON: char = '▸';

pub const SPINNER_FRAMES: [&str; 4] = ["◐", "◓", "◑", "◒"];

// Reply latency, mirrors the portal's simulated network delay
pub const DEFAULT_REPLY_DELAY_MS: u64 = 1000;
pub const SIDEBAR_REPLY_DELAY_MS: u64 = 1500;
pub const MAX_REPLY_DELAY_MS: u64 = 10_000;

pub const TICK_RATE_MS: u64 = 100;

pub const APP_NAME: &str = "mosdac-chat";
