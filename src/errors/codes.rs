pub struct ErrorCode;

impl ErrorCode {
    // Container lookup errors: C1xx
    pub const CONTAINER_NOT_FOUND: &'static str = "C100";

    // Container transition errors: T1xx
    pub const CANNOT_PULL_CONTAINER: &'static str = "T100";
    pub const CANNOT_CREATE_CONTAINER: &'static str = "T101";
    pub const CANNOT_START_CONTAINER: &'static str = "T102";
    pub const CANNOT_STOP_CONTAINER: &'static str = "T103";
    pub const CANNOT_INSPECT_CONTAINER: &'static str = "T104";
    pub const CANNOT_REMOVE_CONTAINER: &'static str = "T105";
    pub const CANNOT_LIST_CONTAINERS: &'static str = "T106";
    pub const DOCKER_TIMEOUT: &'static str = "T107";
    pub const OUT_OF_MEMORY: &'static str = "T108";
    pub const CONTAINER_NETWORKING: &'static str = "T109";
    pub const CANNOT_CREATE_VOLUME: &'static str = "T110";
    pub const CANNOT_INSPECT_VOLUME: &'static str = "T111";

    // Engine errors: D1xx
    pub const ENGINE_REQUEST_FAILED: &'static str = "D100";

    // Configuration errors: F1xx
    pub const CONFIG_READ_FAILED: &'static str = "F100";
    pub const CONFIG_PARSE_FAILED: &'static str = "F101";
    pub const CONFIG_INVALID: &'static str = "F102";

    pub const INTERNAL: &'static str = "E000";
}
