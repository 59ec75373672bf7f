pub use crate::{
    emit::{encode, encode_bytes},
    field::Field,
    jdict_derive::*,
    num::Num,
    rep::FieldRep,
    serial::{Identity, Serial, SerialSeq, Style},
    vecmap::VecMap,
    Json,
};
pub use bytes::Bytes;
pub use chrono::{DateTime, TimeZone, Utc};
