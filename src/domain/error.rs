use snafu::Snafu;

#[derive(Debug, Snafu)]
#[snafu(context(suffix(Err)), visibility(pub(crate)))]
pub enum BridgeError {
    #[snafu(display("Could not reserve room for {requested} body handles"))]
    OutOfMemory { requested: usize },

    #[snafu(display("Simulation config is invalid: {reason}"))]
    InvalidConfig { reason: String },

    #[snafu(display("Simulation config is not valid JSON"))]
    ConfigParse { source: serde_json::Error },

    #[snafu(display("No body with handle {id} exists in this simulation"))]
    UnknownBody { id: u32 },
}

pub type BridgeResult<T> = Result<T, BridgeError>;
