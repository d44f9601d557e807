use crate::errors::ParamsResult;
use bytes::{Bytes, BytesMut};

pub trait ParamsParser {
    fn from_bytes(data: &mut Bytes) -> ParamsResult<Self>
    where
        Self: Sized;
}

pub trait ParamsWriter {
    fn to_bytes(&self, buffer: &mut BytesMut) -> ParamsResult<()>;
}
