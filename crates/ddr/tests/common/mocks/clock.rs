use ls1046afrwy_ddr::soc::DdrClock;
use mockall::mock;

/// Clock that reports the same data rate for every controller.
pub struct FixedClock {
    hz: u64,
}

impl FixedClock {
    pub fn mhz(mhz: u64) -> Self {
        Self {
            hz: mhz * 1_000_000,
        }
    }

    pub fn hz(hz: u64) -> Self {
        Self { hz }
    }
}

impl DdrClock for FixedClock {
    fn ddr_freq(&self, _ctrl_num: u32) -> u64 {
        self.hz
    }
}

mock! {
    pub Clock {}
    impl DdrClock for Clock {
        fn ddr_freq(&self, ctrl_num: u32) -> u64;
    }
}
