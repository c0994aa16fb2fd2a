use cosmwasm_std::StdError;
use cw_utils::{ParseReplyError, PaymentError};
use thiserror::Error;

impl From<StdError> for ContractError {
    fn from(std_error: StdError) -> Self {
        Self::CustomError {
            val: std_error.to_string(),
        }
    }
}

impl From<ContractError> for StdError {
    fn from(contract_error: ContractError) -> Self {
        Self::generic_err(contract_error.to_string())
    }
}

/// Flattens the whole cause chain of a multitest error so nested contract errors stay visible
pub fn parse_err(err: anyhow::Error) -> StdError {
    let msg = err
        .chain()
        .map(|x| x.to_string())
        .collect::<Vec<String>>()
        .join("\n");

    StdError::GenericErr { msg }
}

#[derive(Error, Debug, PartialEq)]
pub enum ContractError {
    #[error("Custom Error val: {val:?}")]
    CustomError { val: String },

    #[error("{0}")]
    Payment(#[from] PaymentError),

    #[error("{0}")]
    ParseReply(#[from] ParseReplyError),

    // ------------------------------ common ----------------------------------------
    #[error("Parsing previous version error!")]
    ParsingPrevVersion,

    #[error("Parsing new version error!")]
    ParsingNewVersion,

    #[error("Msg version is not equal contract new version!")]
    ImproperMsgVersion,

    #[error("Stored contract name {0} doesn't match!")]
    WrongContractName(String),

    #[error("Sender does not have access permissions!")]
    Unauthorized,

    #[error("Undefined Reply ID!")]
    UndefinedReplyId,

    #[error("Wrong funds combination!")]
    WrongFundsCombination,

    // ------------------------------ raffle ----------------------------------------
    #[error("Entry fee can not be equal zero!")]
    ZeroEntryFee,

    #[error("Draw interval can not be equal zero!")]
    ZeroInterval,

    #[error("Insufficient fee: {required} is required!")]
    InsufficientFee { required: String },

    #[error("Round is not open!")]
    RoundNotOpen,

    #[error("Draw trigger is not ready!")]
    TriggerNotReady,

    #[error("Participant index {index} is out of range!")]
    IndexOutOfRange { index: u32 },

    #[error("Unknown randomness request: {request_id}!")]
    UnknownRequest { request_id: u64 },

    #[error("Received invalid randomness!")]
    InvalidRandomness,

    #[error("Prize transfer to the winner failed!")]
    SettlementTransferFailed,

    // ------------------------------ coordinator ----------------------------------------
    #[error("Words amount must be in range 1..={max}!")]
    InvalidNumWords { max: u32 },

    #[error("Nonexistent request!")]
    NonexistentRequest,

    #[error("Subscription is not found!")]
    SubscriptionIsNotFound,

    #[error("Insufficient subscription balance!")]
    InsufficientSubscriptionBalance,

    #[error("Sender is not a subscription consumer!")]
    InvalidConsumer,
}
