//! Pinned versions written into generated manifests

// react
pub const REACT: &str = "18.2.0";
pub const REACT_TEST_RENDERER: &str = "18.2.0";

// react-native
pub const REACT_NATIVE: &str = "0.72.7";
pub const REACT_NATIVE_ESLINT_CONFIG: &str = "^0.72.2";
pub const REACT_NATIVE_METRO_CONFIG: &str = "^0.72.11";
pub const REACT_NATIVE_COMMUNITY_CLI_PLATFORM_ANDROID: &str = "13.0.0";
pub const REACT_NATIVE_COMMUNITY_CLI_PLATFORM_IOS: &str = "13.0.0";

// babel
pub const BABEL_CORE: &str = "^7.20.0";
pub const BABEL_PRESET_ENV: &str = "^7.20.0";
pub const BABEL_RUNTIME: &str = "^7.20.0";

// typescript
pub const TYPESCRIPT: &str = "4.8.4";
pub const TYPES_REACT: &str = "^18.0.24";
pub const TYPES_REACT_TEST_RENDERER: &str = "^18.0.0";
pub const TSCONFIG_REACT_NATIVE: &str = "^3.0.0";

// eslint
pub const ESLINT: &str = "^8.19.0";

// jest
pub const JEST: &str = "^29.2.1";
pub const BABEL_JEST: &str = "^29.2.1";

// metro
pub const METRO_REACT_NATIVE_BABEL_PRESET: &str = "0.76.8";

pub const PRETTIER: &str = "^2.4.1";

pub const NODE_ENGINE: &str = ">=16";
