use bitflags::bitflags;

bitflags! {
    #[repr(transparent)]
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct CliOptions: u32 {
        /// Write text without ANSI styling
        const Plain = 1 << 0;

        /// Print the token dump instead of rendering
        const DumpTokens = 1 << 1;

        /// Debug level logging
        const Debug = 1 << 2;

        /// Print usage and exit
        const Help = 1 << 3;
    }
}
