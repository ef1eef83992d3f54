//! Record to transfer-object mapping for national parks

use parky_common::types::NationalParkDto;

use crate::models::NationalPark;

impl From<NationalPark> for NationalParkDto {
    fn from(park: NationalPark) -> Self {
        NationalParkDto {
            id: park.id,
            name: park.name,
            state: park.state,
            picture: park.picture,
            established: park.established,
            created: park.created_at,
        }
    }
}
