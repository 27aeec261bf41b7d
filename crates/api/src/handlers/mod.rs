pub mod leads;

use super::AppState;
