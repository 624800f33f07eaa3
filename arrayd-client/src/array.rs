use std::{fmt, str::FromStr};

use crate::error::ClientError;

/// Element type of a server-resident array.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DType {
    Int64,
    UInt64,
    Float64,
    Bool,
}

impl FromStr for DType {
    type Err = ClientError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "int64" => Ok(DType::Int64),
            "uint64" => Ok(DType::UInt64),
            "float64" => Ok(DType::Float64),
            "bool" => Ok(DType::Bool),
            other => Err(ClientError::MalformedReply(format!(
                "unknown dtype {other:?}"
            ))),
        }
    }
}

impl fmt::Display for DType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name = match self {
            DType::Int64 => "int64",
            DType::UInt64 => "uint64",
            DType::Float64 => "float64",
            DType::Bool => "bool",
        };
        write!(f, "{name}")
    }
}

/// Client-side handle to an array that lives on the server.
///
/// Constructed from the server's creation descriptor reply, which has the
/// form `created <name> <dtype> <size> <ndim> <shape> <itemsize>`, e.g.
/// `created id_1 int64 100 1 (100) 8`. The handle holds metadata only; the
/// data stays on the server under `name`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArrayHandle {
    pub name: String,
    pub dtype: DType,
    pub size: u64,
    pub ndim: usize,
    pub shape: Vec<u64>,
    pub itemsize: u64,
}

impl ArrayHandle {
    pub fn from_reply(rep_msg: &str) -> Result<ArrayHandle, ClientError> {
        let malformed = |what: &str| ClientError::MalformedReply(format!("{what} in {rep_msg:?}"));

        let mut fields = rep_msg.split_whitespace();
        match fields.next() {
            Some("created") => {}
            _ => return Err(malformed("missing created marker")),
        }
        let name = fields.next().ok_or_else(|| malformed("missing name"))?;
        let dtype: DType = fields
            .next()
            .ok_or_else(|| malformed("missing dtype"))?
            .parse()?;
        let size = parse_field(fields.next(), || malformed("bad size"))?;
        let ndim: usize = parse_field(fields.next(), || malformed("bad ndim"))?;
        let shape = parse_shape(fields.next().ok_or_else(|| malformed("missing shape"))?)
            .ok_or_else(|| malformed("bad shape"))?;
        let itemsize = parse_field(fields.next(), || malformed("bad itemsize"))?;

        if shape.len() != ndim {
            return Err(malformed("shape does not match ndim"));
        }

        Ok(ArrayHandle {
            name: name.to_string(),
            dtype,
            size,
            ndim,
            shape,
            itemsize,
        })
    }
}

fn parse_field<N: FromStr>(
    field: Option<&str>,
    err: impl Fn() -> ClientError,
) -> Result<N, ClientError> {
    field.and_then(|f| f.parse().ok()).ok_or_else(err)
}

/// Shape arrives as a parenthesized tuple, e.g. `(100)` or `(20,5)`.
fn parse_shape(field: &str) -> Option<Vec<u64>> {
    let inner = field.strip_prefix('(')?.strip_suffix(')')?;
    inner
        .split(',')
        .map(str::trim)
        .filter(|dim| !dim.is_empty())
        .map(|dim| dim.parse().ok())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::{ArrayHandle, DType};
    use crate::error::ClientError;

    #[test]
    fn parses_1d_descriptor() {
        let handle = ArrayHandle::from_reply("created id_1 int64 100 1 (100) 8").unwrap();
        assert_eq!(handle.name, "id_1");
        assert_eq!(handle.dtype, DType::Int64);
        assert_eq!(handle.size, 100);
        assert_eq!(handle.ndim, 1);
        assert_eq!(handle.shape, vec![100]);
        assert_eq!(handle.itemsize, 8);
    }

    #[test]
    fn parses_2d_descriptor() {
        let handle = ArrayHandle::from_reply("created id_7 float64 100 2 (20,5) 8").unwrap();
        assert_eq!(handle.dtype, DType::Float64);
        assert_eq!(handle.ndim, 2);
        assert_eq!(handle.shape, vec![20, 5]);
    }

    #[test]
    fn rejects_malformed_descriptors() {
        for rep in [
            "",
            "deleted id_1 int64 100 1 (100) 8",
            "created id_1 complex128 100 1 (100) 8",
            "created id_1 int64 100 2 (100) 8",
            "created id_1 int64",
            "created id_1 int64 100 1 100 8",
        ] {
            assert!(
                matches!(
                    ArrayHandle::from_reply(rep),
                    Err(ClientError::MalformedReply(_))
                ),
                "accepted {rep:?}"
            );
        }
    }
}
