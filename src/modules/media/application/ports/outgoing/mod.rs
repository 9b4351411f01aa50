pub mod storage_signer;
