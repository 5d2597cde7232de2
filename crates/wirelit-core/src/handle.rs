//! Handle resources: subtypes, rights, the per-case handle table and
//! expected handle dispositions.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Kernel object kind of a handle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HandleSubtype {
    /// Untyped handle; accepts any object.
    Handle,
    Bti,
    Channel,
    Clock,
    Debuglog,
    Event,
    Eventpair,
    Exception,
    Fifo,
    Guest,
    Interrupt,
    Iommu,
    Job,
    Pager,
    PciDevice,
    Pmt,
    Port,
    Process,
    Profile,
    Resource,
    Socket,
    Stream,
    SuspendToken,
    Thread,
    Timer,
    Vcpu,
    Vmar,
    Vmo,
}

impl HandleSubtype {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Handle => "handle",
            Self::Bti => "bti",
            Self::Channel => "channel",
            Self::Clock => "clock",
            Self::Debuglog => "debuglog",
            Self::Event => "event",
            Self::Eventpair => "eventpair",
            Self::Exception => "exception",
            Self::Fifo => "fifo",
            Self::Guest => "guest",
            Self::Interrupt => "interrupt",
            Self::Iommu => "iommu",
            Self::Job => "job",
            Self::Pager => "pager",
            Self::PciDevice => "pci_device",
            Self::Pmt => "pmt",
            Self::Port => "port",
            Self::Process => "process",
            Self::Profile => "profile",
            Self::Resource => "resource",
            Self::Socket => "socket",
            Self::Stream => "stream",
            Self::SuspendToken => "suspend_token",
            Self::Thread => "thread",
            Self::Timer => "timer",
            Self::Vcpu => "vcpu",
            Self::Vmar => "vmar",
            Self::Vmo => "vmo",
        }
    }

    /// Kernel object type number, as carried in handle dispositions.
    pub fn object_type(self) -> u32 {
        match self {
            Self::Handle => 0,
            Self::Process => 1,
            Self::Thread => 2,
            Self::Vmo => 3,
            Self::Channel => 4,
            Self::Event => 5,
            Self::Port => 6,
            Self::Interrupt => 9,
            Self::PciDevice => 11,
            Self::Debuglog => 12,
            Self::Socket => 14,
            Self::Resource => 15,
            Self::Eventpair => 16,
            Self::Job => 17,
            Self::Vmar => 18,
            Self::Fifo => 19,
            Self::Guest => 20,
            Self::Vcpu => 21,
            Self::Timer => 22,
            Self::Iommu => 23,
            Self::Bti => 24,
            Self::Profile => 25,
            Self::Pmt => 26,
            Self::SuspendToken => 27,
            Self::Pager => 28,
            Self::Exception => 29,
            Self::Clock => 30,
            Self::Stream => 31,
        }
    }
}

impl fmt::Display for HandleSubtype {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Handle access rights bitmask.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Rights(pub u32);

impl Rights {
    pub const NONE: Self = Self(0);
    pub const DUPLICATE: Self = Self(1 << 0);
    pub const TRANSFER: Self = Self(1 << 1);
    pub const READ: Self = Self(1 << 2);
    pub const WRITE: Self = Self(1 << 3);
    pub const SIGNAL: Self = Self(1 << 12);
    pub const SAME_RIGHTS: Self = Self(1 << 31);

    pub(crate) fn same_rights() -> Self {
        Self::SAME_RIGHTS
    }

    pub fn bits(self) -> u32 {
        self.0
    }
}

impl std::ops::BitOr for Rights {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

impl fmt::Display for Rights {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One handle the generated test creates up front.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct HandleDef {
    pub subtype: HandleSubtype,
    pub rights: Rights,
}

impl HandleDef {
    pub fn new(subtype: HandleSubtype, rights: Rights) -> Self {
        Self { subtype, rights }
    }
}

/// Position-indexed handle definitions for one test case.
///
/// Values refer to entries by index only, so the same handle can appear in
/// several places while subtype and rights live here alone.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HandleTable {
    defs: Vec<HandleDef>,
}

impl HandleTable {
    pub fn new(defs: Vec<HandleDef>) -> Self {
        Self { defs }
    }

    pub fn get(&self, index: usize) -> Option<&HandleDef> {
        self.defs.get(index)
    }

    pub fn len(&self) -> usize {
        self.defs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.defs.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &HandleDef> {
        self.defs.iter()
    }
}

impl From<Vec<HandleDef>> for HandleTable {
    fn from(defs: Vec<HandleDef>) -> Self {
        Self::new(defs)
    }
}

/// Expected outbound handle after encoding: which table entry moves, and the
/// object type and rights the encoder must attach to it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct HandleDisposition {
    pub handle: usize,
    pub subtype: HandleSubtype,
    pub rights: Rights,
}
