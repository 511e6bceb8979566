// Fixed legal wording. Clause texts are the defaults a caller's `poderes`
// field replaces verbatim.

/// Default clause for powers of attorney, individual or corporate, one or many grantees.
pub const POWER_OF_ATTORNEY_CLAUSE: &str = "Podendo, para tanto, o dito procurador representar o outorgante perante o CRVA/DETRAN, para fins de \
transferência de propriedade podendo vender para si e/ou para terceiros, fazer comunicação de venda, \
conferindo-lhe poderes específicos para, em seu nome, receber o valor decorrente da venda, assinar o campo \
de acordo no CRV, solicitar a ativação ou baixa do veículo, assinar requerimentos de alteração de características \
e informações do veículo, inclusive troca de motor ou restrições fiduciárias, reclassificar o veículo para média \
monta, recuperar de sinistro, requerer processo de desbloqueio de veículo acidentado, realizar troca de município, \
incluir alienação em favor do outorgante, endossar documentação, alienar fiduciariamente ou firmar contrato de \
reserva de domínio, seja para si ou para terceiros, emitir ou cancelar ATPV-e, assinar tanto no campo de comprador \
quanto no de vendedor da ATPV-e, inclusive solicitar segunda via da ATPV-e, bem como emitir o CRLV-e, alterar \
endereço de postagem, assinar declaração de endereço, solicitar liberação para laudo no INMETRO (CSV), usar o \
veículo em qualquer parte do território nacional ou estrangeiro, remover o veículo de depósito (CRD), solicitar e \
retirar D.C.P.P.O., solicitar placas e vistorias, retirar documentos nos Correios, praticar todos os atos necessários \
para uso e gozo do veículo como coisa própria, sem interferência de terceiros, requerendo, promovendo e assinando o \
que se fizer necessário, inclusive assinando declarações de responsabilidade pela procedência de motor, carroceria e \
chassi, declarações de difícil acesso à coleta do número do motor e declarações de perda de plaquetas.";

/// Default clause for representation in a purchase.
pub const REPRESENTATION_CLAUSE: &str = "para fim especial efetuar a transferência, assinar de acordo no CRV, assinar como comprador na ATPV-e, \
emitir CRLV-e, assinar declaração de difícil acesso à coleta do número do motor, e declarar endereço em nome \
do OUTORGANTE";

/// Default clause for sub-delegations.
pub const SUB_DELEGATION_CLAUSE: &str = "O procurador fica substabelecido com todos os poderes anteriormente conferidos a mim na referida \
procuração veicular, podendo praticar todos os atos descritos na mesma";

/// Opening of the scope line of a power of attorney; the vehicle follows it.
pub const POWER_OF_ATTORNEY_SCOPE: &str =
    "para fim especial, podendo vender para si e/ou para terceiros um";

pub const GRANTOR_LABEL: &str = "OUTORGANTE: ";
pub const GRANTEES_LABEL: &str = "OUTORGADOS: ";
pub const SCOPE_LABEL: &str = "REPRESENTAÇÃO: ";
pub const APPOINTMENT_CAPTION: &str = "NOMEIO E CONSTITUO MEU BASTANTE PROCURADOR";

/// Joins grantees who may each act alone.
pub const GRANTEE_SEPARATOR: &str = ", e/ou: ";
