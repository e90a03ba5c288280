//! Legacy deposit transaction type, and the field set shared by every deposit shape.

use super::{DepositTransaction, DepositTxType};
use alloc::vec::Vec;
use alloy_eips::eip2718::{Eip2718Error, Eip2718Result};
use alloy_primitives::{keccak256, Address, Bytes, TxKind, B256, U256};
use alloy_rlp::{
    Buf, BufMut, Decodable, Encodable, Error as DecodeError, Header, EMPTY_STRING_CODE,
};

/// Deposit transactions, also known as deposits, are initiated on L1 and executed on L2.
///
/// [TxDeposit] is the legacy deposit (type `0x7e`). The Bluebird shapes in [super::v2] wrap it
/// and reuse its fields and RLP layout.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct TxDeposit {
    /// Hash that uniquely identifies the source of the deposit.
    pub source_hash: B256,
    /// The address of the sender account.
    pub from: Address,
    /// The address of the recipient account, or [TxKind::Create] if the deposited transaction is
    /// a contract creation.
    pub to: TxKind,
    /// The ETH value to mint on L2.
    pub mint: Option<u128>,
    /// The ETH value to send to the recipient account.
    pub value: U256,
    /// The gas limit for the L2 transaction.
    pub gas_limit: u64,
    /// Field indicating if this transaction is exempt from the L2 gas limit.
    pub is_system_transaction: bool,
    /// Input has two uses depending if the transaction is a create or a call.
    pub input: Bytes,
}

impl DepositTransaction for TxDeposit {
    fn source_hash(&self) -> B256 {
        self.source_hash
    }

    fn mint(&self) -> Option<u128> {
        self.mint
    }

    fn is_system_transaction(&self) -> bool {
        self.is_system_transaction
    }
}

impl TxDeposit {
    /// Returns the transaction type of the legacy deposit.
    pub const fn tx_type(&self) -> DepositTxType {
        DepositTxType::V1
    }

    /// Decodes the inner [TxDeposit] fields from RLP bytes.
    ///
    /// NOTE: This assumes a RLP header has already been decoded, and _just_ decodes the following
    /// RLP fields in the following order:
    ///
    /// - `source_hash`
    /// - `from`
    /// - `to`
    /// - `mint`
    /// - `value`
    /// - `gas_limit`
    /// - `is_system_transaction`
    /// - `input`
    pub fn decode_fields(buf: &mut &[u8]) -> alloy_rlp::Result<Self> {
        Ok(Self {
            source_hash: Decodable::decode(buf)?,
            from: Decodable::decode(buf)?,
            to: Decodable::decode(buf)?,
            mint: if *buf.first().ok_or(DecodeError::InputTooShort)? == EMPTY_STRING_CODE {
                buf.advance(1);
                None
            } else {
                Some(Decodable::decode(buf)?)
            },
            value: Decodable::decode(buf)?,
            gas_limit: Decodable::decode(buf)?,
            is_system_transaction: Decodable::decode(buf)?,
            input: Decodable::decode(buf)?,
        })
    }

    /// Outputs the length of the transaction's fields, without a RLP header.
    pub(crate) fn fields_len(&self) -> usize {
        self.source_hash.length()
            + self.from.length()
            + self.to.length()
            + self.mint.map_or(1, |mint| mint.length())
            + self.identity_tail_len()
    }

    /// Encodes only the transaction's fields into the desired buffer, without a RLP header.
    pub(crate) fn encode_fields(&self, out: &mut dyn BufMut) {
        self.source_hash.encode(out);
        self.from.encode(out);
        self.to.encode(out);
        if let Some(mint) = self.mint {
            mint.encode(out);
        } else {
            out.put_u8(EMPTY_STRING_CODE);
        }
        self.encode_identity_tail(out);
    }

    /// Length of the fields that identify the deposit. Equal to [Self::fields_len] minus `mint`.
    pub(crate) fn identity_fields_len(&self) -> usize {
        self.source_hash.length() + self.from.length() + self.to.length() + self.identity_tail_len()
    }

    /// Encodes the fields that identify the deposit, skipping `mint`.
    pub(crate) fn encode_identity_fields(&self, out: &mut dyn BufMut) {
        self.source_hash.encode(out);
        self.from.encode(out);
        self.to.encode(out);
        self.encode_identity_tail(out);
    }

    fn identity_tail_len(&self) -> usize {
        self.value.length()
            + self.gas_limit.length()
            + self.is_system_transaction.length()
            + self.input.length()
    }

    fn encode_identity_tail(&self, out: &mut dyn BufMut) {
        self.value.encode(out);
        self.gas_limit.encode(out);
        self.is_system_transaction.encode(out);
        self.input.encode(out);
    }

    /// Computes the domain-separated hash of the deposit under the type tag `ty`.
    ///
    /// The preimage is `ty || rlp([source_hash, from, to, value, gas, is_system_tx, input])`,
    /// with `effective_nonce` appended to the list when present.
    pub(crate) fn identity_hash(&self, ty: DepositTxType, effective_nonce: Option<u64>) -> B256 {
        let payload_length =
            self.identity_fields_len() + effective_nonce.map_or(0, |nonce| nonce.length());
        let header = Header { list: true, payload_length };

        let mut buf = Vec::with_capacity(1 + header.length() + payload_length);
        buf.put_u8(ty as u8);
        header.encode(&mut buf);
        self.encode_identity_fields(&mut buf);
        if let Some(nonce) = effective_nonce {
            nonce.encode(&mut buf);
        }
        keccak256(buf)
    }

    /// Encodes the deposit as an EIP-2718 envelope tagged with `ty`.
    pub(crate) fn encode_typed(&self, ty: DepositTxType, out: &mut dyn BufMut) {
        out.put_u8(ty as u8);
        self.encode(out);
    }

    /// Decodes an EIP-2718 envelope, requiring the type byte to equal `ty`.
    pub(crate) fn decode_typed(ty: DepositTxType, buf: &mut &[u8]) -> Eip2718Result<Self> {
        let tag = *buf.first().ok_or(DecodeError::InputTooShort)?;
        if tag != ty as u8 {
            return Err(Eip2718Error::UnexpectedType(tag));
        }
        buf.advance(1);
        Ok(Self::decode(buf)?)
    }

    /// Encodes the legacy deposit as an EIP-2718 envelope: `0x7e || rlp(fields)`.
    pub fn encode_2718(&self, out: &mut dyn BufMut) {
        self.encode_typed(DepositTxType::V1, out)
    }

    /// Returns the length of the EIP-2718 encoding.
    pub fn encode_2718_len(&self) -> usize {
        1 + self.length()
    }

    /// Decodes a legacy deposit from its EIP-2718 encoding.
    pub fn decode_2718(buf: &mut &[u8]) -> Eip2718Result<Self> {
        Self::decode_typed(DepositTxType::V1, buf)
    }

    /// Returns the transaction hash of the legacy deposit.
    pub fn tx_hash(&self) -> B256 {
        self.identity_hash(DepositTxType::V1, None)
    }
}

impl Encodable for TxDeposit {
    fn encode(&self, out: &mut dyn BufMut) {
        Header { list: true, payload_length: self.fields_len() }.encode(out);
        self.encode_fields(out);
    }

    fn length(&self) -> usize {
        let payload_length = self.fields_len();
        Header { list: true, payload_length }.length() + payload_length
    }
}

impl Decodable for TxDeposit {
    fn decode(buf: &mut &[u8]) -> alloy_rlp::Result<Self> {
        let header = Header::decode(buf)?;
        if !header.list {
            return Err(DecodeError::UnexpectedString);
        }
        if header.payload_length > buf.len() {
            return Err(DecodeError::InputTooShort);
        }

        // Fields are decoded from the declared payload only, so a short header cannot leak
        // into trailing bytes.
        let mut body = &buf[..header.payload_length];
        let tx = Self::decode_fields(&mut body)?;
        if !body.is_empty() {
            return Err(DecodeError::ListLengthMismatch {
                expected: header.payload_length,
                got: header.payload_length - body.len(),
            });
        }
        buf.advance(header.payload_length);
        Ok(tx)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::deposit_fixture;
    use alloy_primitives::{address, hex};

    #[test]
    fn test_deposit_transaction_trait() {
        let tx = TxDeposit {
            source_hash: B256::with_last_byte(42),
            mint: Some(100),
            value: U256::from(1000),
            gas_limit: 50000,
            is_system_transaction: true,
            ..Default::default()
        };

        assert_eq!(tx.source_hash(), B256::with_last_byte(42));
        assert_eq!(tx.mint(), Some(100));
        assert!(tx.is_system_transaction());
        assert!(tx.is_deposit());
        assert_eq!(tx.tx_type(), DepositTxType::V1);
    }

    #[test]
    fn test_encode_2718_known_bytes() {
        let tx = TxDeposit {
            source_hash: B256::default(),
            from: address!("1111111111111111111111111111111111111111"),
            to: TxKind::Create,
            mint: Some(10),
            value: U256::from(100),
            gas_limit: 1000,
            is_system_transaction: false,
            input: Bytes::default(),
        };
        let mut buf = Vec::new();
        tx.encode_2718(&mut buf);
        assert_eq!(
            buf,
            hex!("7ef83ea00000000000000000000000000000000000000000000000000000000000000000941111111111111111111111111111111111111111800a648203e88080")
        );
        assert_eq!(buf.len(), tx.encode_2718_len());
    }

    #[test]
    fn test_decode_2718_rejects_other_tag() {
        let tx = deposit_fixture();
        let mut buf = Vec::new();
        tx.encode_typed(DepositTxType::V2, &mut buf);
        let err = TxDeposit::decode_2718(&mut buf.as_slice()).unwrap_err();
        assert!(matches!(err, Eip2718Error::UnexpectedType(0x7D)));
    }

    #[test]
    fn test_decode_empty_input() {
        let err = TxDeposit::decode_2718(&mut [].as_slice()).unwrap_err();
        assert!(matches!(err, Eip2718Error::RlpError(DecodeError::InputTooShort)));
    }

    #[test]
    fn test_decode_truncated() {
        let mut buf = Vec::new();
        deposit_fixture().encode_2718(&mut buf);
        for len in [1, 2, 10, buf.len() - 1] {
            assert!(TxDeposit::decode_2718(&mut &buf[..len]).is_err(), "len {len}");
        }
    }

    #[test]
    fn test_decode_rejects_long_list_header() {
        let tx = deposit_fixture();
        let mut buf = Vec::new();
        tx.encode(&mut buf);
        // Claim one more payload byte than the fields use and provide it.
        let header = Header { list: true, payload_length: tx.fields_len() + 1 };
        let mut malformed = Vec::new();
        header.encode(&mut malformed);
        tx.encode_fields(&mut malformed);
        malformed.push(0x80);

        let err = TxDeposit::decode(&mut malformed.as_slice()).unwrap_err();
        assert_eq!(
            err,
            DecodeError::ListLengthMismatch {
                expected: tx.fields_len() + 1,
                got: tx.fields_len()
            }
        );
    }

    #[test]
    fn test_decode_rejects_short_list_header() {
        let tx = deposit_fixture();
        let header = Header { list: true, payload_length: tx.fields_len() - 1 };
        let mut malformed = Vec::new();
        header.encode(&mut malformed);
        tx.encode_fields(&mut malformed);

        assert!(TxDeposit::decode(&mut malformed.as_slice()).is_err());
    }

    #[test]
    fn test_decode_rejects_string_header() {
        let err = TxDeposit::decode(&mut hex!("83010203").as_slice()).unwrap_err();
        assert_eq!(err, DecodeError::UnexpectedString);
    }

    #[test]
    fn test_zero_mint_decodes_as_none() {
        let tx = TxDeposit { mint: Some(0), ..deposit_fixture() };
        let mut buf = Vec::new();
        tx.encode_2718(&mut buf);
        let decoded = TxDeposit::decode_2718(&mut buf.as_slice()).unwrap();
        assert_eq!(decoded.mint, None);
    }

    #[test]
    fn test_identity_fields_skip_mint() {
        let tx = deposit_fixture();
        let mint_len = tx.mint.map_or(1, |mint| mint.length());
        assert_eq!(tx.identity_fields_len() + mint_len, tx.fields_len());
    }
}
