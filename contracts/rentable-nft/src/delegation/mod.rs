/*!
# Delegation Ledger

Time-bounded "user" role on top of token ownership. The owner of a token
may name a user and a deadline; the user is reported by `user_of` until the
ledger timestamp reaches that deadline, after which the token reads as
unrented without any write.

## Architecture

```
DelegationLedger          ← authorization gate, expiry on read, transfer hook
    ├── DelegationRepository  ← persistent storage of UserInfo per token
    └── &impl OwnerLookup     ← current owner, from the OwnershipRegistry
```

## Typical flow

```
1. Owner calls `set_user(owner, token_id, Some(renter), expires)`.
2. Anyone calls `user_of(token_id)`; `Some(renter)` while now < expires.
3. Owner revokes early with `set_user(owner, token_id, None, 0)`.
4. Any transfer or burn calls `before_transfer`, which drops the record.
```

## Storage keys

| Key | Tier | Description |
|---|---|---|
| `User(token_id)` | Persistent | `UserInfo { user, expires }` |
*/

pub mod manager;
pub mod repository;

pub use manager::DelegationLedger;
pub use repository::DelegationRepository;
