use std::fmt;
use crate::connector::enums::builtin_driver::BuiltinDriver;

impl fmt::Display for BuiltinDriver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl BuiltinDriver {
    pub const ALL: [BuiltinDriver; 4] = [
        BuiltinDriver::null,
        BuiltinDriver::memory,
        BuiltinDriver::adapter,
        BuiltinDriver::illuminate,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            BuiltinDriver::null => "null",
            BuiltinDriver::memory => "memory",
            BuiltinDriver::adapter => "adapter",
            BuiltinDriver::illuminate => "illuminate",
        }
    }
}
