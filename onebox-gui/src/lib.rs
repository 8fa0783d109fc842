pub mod app;
pub mod dir;
pub mod logger;
pub mod services;

use onebox::Version;

pub const VERSION: Version = Version {
    major: 0,
    minor: 1,
    patch: 0,
};
