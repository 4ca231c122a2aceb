mod gracefull;
mod logs;
mod mask;

pub use self::gracefull::shutdown_signal;
pub use self::logs::Logger;
pub use self::mask::mask_card_number;
