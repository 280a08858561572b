//! Static church content served verbatim by the API.
//!
//! None of this lives in the store. The server reads it from configuration,
//! falling back to the defaults below.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ministry {
  pub id:            String,
  pub name:          String,
  pub description:   String,
  pub leader:        String,
  pub contact:       String,
  pub schedule:      String,
  pub whatsapp_link: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChurchInfo {
  pub name:      String,
  pub address:   String,
  pub phone:     String,
  pub instagram: String,
  pub maps_link: String,
}

/// Shared folders holding recorded sermons, studies and videos.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MediaLinks {
  pub pregacoes: String,
  pub estudos:   String,
  pub videos:    String,
}

/// Everything the static endpoints return.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChurchContent {
  pub church:     ChurchInfo,
  pub media:      MediaLinks,
  pub ministries: Vec<Ministry>,
}

impl Default for ChurchContent {
  fn default() -> Self {
    Self {
      church:     ChurchInfo::default(),
      media:      MediaLinks::default(),
      ministries: default_ministries(),
    }
  }
}

impl Default for ChurchInfo {
  fn default() -> Self {
    Self {
      name:      "Primeira Igreja Batista do Cordeiro".into(),
      address:   "R. Sete de Setembro, 451, São João dos Patos - MA, CEP 65665-000".into(),
      phone:     "(99) 99999-9999".into(),
      instagram: "@pibdocordeiro".into(),
      maps_link: "https://maps.google.com/?q=R.+Sete+de+Setembro,+451,+São+João+dos+Patos+-+MA"
        .into(),
    }
  }
}

impl Default for MediaLinks {
  fn default() -> Self {
    Self {
      pregacoes: "https://drive.google.com/drive/folders/PREGACOES_FOLDER_ID".into(),
      estudos:   "https://drive.google.com/drive/folders/ESTUDOS_FOLDER_ID".into(),
      videos:    "https://drive.google.com/drive/folders/VIDEOS_FOLDER_ID".into(),
    }
  }
}

fn ministry(
  id: &str,
  name: &str,
  description: &str,
  leader: &str,
  contact: &str,
  schedule: &str,
  whatsapp_link: &str,
) -> Ministry {
  Ministry {
    id:            id.into(),
    name:          name.into(),
    description:   description.into(),
    leader:        leader.into(),
    contact:       contact.into(),
    schedule:      schedule.into(),
    whatsapp_link: whatsapp_link.into(),
  }
}

fn default_ministries() -> Vec<Ministry> {
  vec![
    ministry(
      "mcm",
      "MCM - Mulheres Cristãs em Missão",
      "Ministério dedicado às mulheres da igreja, promovendo crescimento espiritual e comunhão.",
      "Irmã Maria",
      "(99) 99999-9999",
      "Sextas-feiras às 19h30",
      "https://wa.me/5599999999999",
    ),
    ministry(
      "unijovem",
      "UNIJOVEM",
      "Ministério jovem focado no discipulado e evangelização da juventude.",
      "Pastor João",
      "(99) 99999-9998",
      "Sábados às 19h30",
      "https://wa.me/5599999999998",
    ),
    ministry(
      "umhbb",
      "UMHBB",
      "União Masculina Batista, fortalecendo os homens na fé e liderança cristã.",
      "Irmão Pedro",
      "(99) 99999-9997",
      "Sábados às 19h30",
      "https://wa.me/5599999999997",
    ),
    ministry(
      "mensageiras",
      "Mensageiras do Rei",
      "Ministério infantil dedicado ao ensino bíblico para crianças.",
      "Irmã Ana",
      "(99) 99999-9996",
      "Sábados às 15h30",
      "https://wa.me/5599999999996",
    ),
  ]
}
