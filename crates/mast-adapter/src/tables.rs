//! Published field tables for the built-in catalogs
//!
//! Each entry is `(published name, internal name, type)`. Published names are
//! kept exactly as the service spells them, including its typos
//! (`"Semi-major Axus err1"`, `"Time_err2"`).

use mast_record::FieldType;
use mast_record::FieldType::{Float, Integer, Text};

/// Kepler Objects of Interest: planet candidates with transit fits and stellar parameters.
pub const KOI_FIELDS: &[(&str, &str, FieldType)] = &[
    ("Kepler ID", "kepid", Integer),
    ("KOI Name", "kepoi_name", Text),
    ("KOI Number", "kepoi", Text),
    ("Kepler Disposition", "koi_pdisposition", Text),
    ("NExScI Disposition", "koi_disposition", Text),
    ("RA (J2000)", "degree_ra", Float),
    ("Dec (J2000)", "degree_dec", Float),
    ("Time of Transit Epoch", "koi_time0bk", Float),
    ("Time err1", "koi_time0bk_err1", Float),
    ("Time_err2", "koi_time0bk_err2", Float),
    ("Period", "koi_period", Float),
    ("Period err1", "koi_period_err1", Float),
    ("Period err2", "koi_period_err2", Float),
    ("Transit Depth", "koi_depth", Float),
    ("Depth err1", "koi_depth_err1", Float),
    ("Depth err2", "koi_depth_err2", Float),
    ("Duration", "koi_duration", Float),
    ("Duration err1", "koi_duration_err1", Float),
    ("Duration err2", "koi_duration_err2", Float),
    ("Ingress Duration", "koi_ingress", Float),
    ("Ingress err1", "koi_ingress_err1", Float),
    ("Ingress err2", "koi_ingress_err2", Float),
    ("Impact Parameter", "koi_impact", Float),
    ("Impact Parameter err1", "koi_impact_err1", Float),
    ("Impact Parameter err2", "koi_impact_err2", Float),
    ("Inclination", "koi_incl", Float),
    ("Inclination err1", "koi_incl_err1", Float),
    ("Inclination err2", "koi_incl_err2", Float),
    ("Semi-major Axis", "koi_sma", Float),
    ("Semi-major Axus err1", "koi_sma_err1", Float),
    ("Semi-major Axis err2", "koi_sma_err2", Float),
    ("Eccentricity", "koi_eccen", Float),
    ("Eccentricity err1", "koi_eccen_err1", Float),
    ("Eccentricity err2", "koi_eccen_err2", Float),
    ("Long of Periastron", "koi_longp", Float),
    ("Long err1", "koi_longp_err1", Float),
    ("Long err2", "koi_longp_err2", Float),
    ("r/R", "koi_ror", Float),
    ("r/R err1", "koi_ror_err1", Float),
    ("r/R err2", "koi_ror_err2", Float),
    ("a/R", "koi_dor", Float),
    ("a/R err1", "koi_dor_err1", Float),
    ("a/R err2", "koi_dor_err2", Float),
    ("Planet Radius", "koi_prad", Float),
    ("Planet Radius err1", "koi_prad_err1", Float),
    ("Planet Radius err2", "koi_prad_err2", Float),
    ("Teq", "koi_teq", Integer),
    ("Teq err1", "koi_teq_err1", Integer),
    ("Teq err2", "koi_teq_err2", Integer),
    ("Teff", "koi_steff", Integer),
    ("Teff err1", "koi_steff_err1", Integer),
    ("Teff err2", "koi_steff_err2", Integer),
    ("log(g)", "koi_slogg", Float),
    ("log(g) err1", "koi_slogg_err1", Float),
    ("log(g) err2", "koi_slogg_err2", Float),
    ("Metallicity", "koi_smet", Float),
    ("Metallicity err1", "koi_smet_err1", Float),
    ("Metallicity err2", "koi_smet_err2", Float),
    ("Stellar Radius", "koi_srad", Float),
    ("Stellar Radius err1", "koi_srad_err1", Float),
    ("Stellar Radius err2", "koi_srad_err2", Float),
    ("Stellar Mass", "koi_smass", Float),
    ("Stellar Mass err2", "koi_smass_err2", Float),
    ("Stellar Mass err1", "koi_smass_err1", Float),
    ("Age", "koi_sage", Float),
    ("Age err1", "koi_sage_err1", Float),
    ("Age err2", "koi_sage_err2", Float),
    ("Provenance", "koi_sparprov", Text),
    ("Quarters", "koi_quarters", Text),
    ("Limb Darkening Model", "koi_limbdark_mod", Text),
    ("Limb Darkening Coeff1", "koi_ldm_coeff1", Float),
    ("Limb Darkening Coeff2", "koi_ldm_coeff2", Float),
    ("Limb Darkening Coeff3", "koi_ldm_coeff3", Float),
    ("Limb Darkening Coeff4", "koi_ldm_coeff4", Float),
    ("Transit Number", "koi_num_transits", Integer),
    ("Max single event sigma", "koi_max_sngle_ev", Float),
    ("Max Multievent sigma", "koi_max_mult_ev", Float),
    ("KOI count", "koi_count", Integer),
    ("Binary Discrimination", "koi_bin_oedp_sig", Float),
    ("False Positive Bkgnd ID", "koi_fp_bkgid", Text),
    ("J-band diff", "koi_fp_djmag", Text),
    ("Comments", "koi_comment", Text),
    ("Transit Model", "koi_trans_mod", Text),
    ("Transit Model SNR", "koi_model_snr", Float),
    ("Transit Model DOF", "koi_model_dof", Float),
    ("Transit Model chisq", "koi_model_chisq", Float),
    ("FWM motion signif.", "koi_fwm_stat_sig", Float),
    ("gmag", "koi_gmag", Float),
    ("gmag err", "koi_gmag_err", Float),
    ("rmag", "koi_rmag", Float),
    ("rmag err", "koi_rmag_err", Float),
    ("imag", "koi_imag", Float),
    ("imag err", "koi_imag_err", Float),
    ("zmag", "koi_zmag", Float),
    ("zmag err", "koi_zmag_err", Float),
    ("Jmag", "koi_jmag", Float),
    ("Jmag err", "koi_jmag_err", Float),
    ("Hmag", "koi_hmag", Float),
    ("Hmag err", "koi_hmag_err", Float),
    ("Kmag", "koi_kmag", Float),
    ("Kmag err", "koi_kmag_err", Float),
    ("kepmag", "koi_kepmag", Float),
    ("kepmag err", "koi_kepmag_err", Float),
    ("Delivery Name", "koi_delivname", Text),
    ("FWM SRA", "koi_fwm_sra", Float),
    ("FWM SRA err", "koi_fwm_sra_err", Float),
    ("FWM SDec", "koi_fwm_sdec", Float),
    ("FWM SDec err", "koi_fwm_sdec_err", Float),
    ("FWM SRAO", "koi_fwm_srao", Float),
    ("FWM SRAO err", "koi_fwm_srao_err", Float),
    ("FWM SDeco", "koi_fwm_sdeco", Float),
    ("FWM SDeco err", "koi_fwm_sdeco_err", Float),
    ("FWM PRAO", "koi_fwm_prao", Float),
    ("FWM PRAO err", "koi_fwm_prao_err", Float),
    ("FWM PDeco", "koi_fwm_pdeco", Float),
    ("FWM PDeco err", "koi_fwm_pdeco_err", Float),
    ("Dicco MRA", "koi_dicco_mra", Float),
    ("Dicco MRA err", "koi_dicco_mra_err", Float),
    ("Dicco MDec", "koi_dicco_mdec", Float),
    ("Dicco MDec err", "koi_dicco_mdec_err", Float),
    ("Dicco MSky", "koi_dicco_msky", Float),
    ("Dicco MSky err", "koi_dicco_msky_err", Float),
    ("Dicco FRA", "koi_dicco_fra", Float),
    ("Dicco FRA err", "koi_dicco_fra_err", Float),
    ("Dicco FDec", "koi_dicco_fdec", Float),
    ("Dicco FDec err", "koi_dicco_fdec_err", Float),
    ("Dicco FSky", "koi_dicco_fsky", Float),
    ("Dicco FSky err", "koi_dicco_fsky_err", Float),
    ("Dikco MRA", "koi_dikco_mra", Float),
    ("Dikco MRA err", "koi_dikco_mra_err", Float),
    ("Dikco MDec", "koi_dikco_mdec", Float),
    ("Dikco MDec err", "koi_dikco_mdec_err", Float),
    ("Dikco MSky", "koi_dikco_msky", Float),
    ("Dikco MSky err", "koi_dikco_msky_err", Float),
    ("Dikco FRA", "koi_dikco_fra", Float),
    ("Dikco FRA err", "koi_dikco_fra_err", Float),
    ("Dikco FDec", "koi_dikco_fdec", Float),
    ("Dikco FDec err", "koi_dikco_fdec_err", Float),
    ("Dikco FSky", "koi_dikco_fsky", Float),
    ("Dikco FSky err", "koi_dikco_fsky_err", Float),
    ("Last Update", "rowupdate", Text),
];

/// Confirmed Kepler planets.
pub const PLANET_FIELDS: &[(&str, &str, FieldType)] = &[
    ("Planet Name", "kepler_name", Text),
    ("Kepler ID", "kepid", Integer),
    ("KOI Name", "kepoi_name", Text),
    ("Alt Name", "alt_name", Text),
    ("KOI Number", "koi_number", Text),
    ("RA (J2000)", "degree_ra", Float),
    ("RA Error", "ra_err", Float),
    ("Dec (J2000)", "degree_dec", Float),
    ("Dec Error", "dec_err", Float),
    ("2mass Name", "tm_designation", Text),
    ("Planet temp", "koi_teq", Integer),
    ("Planet Radius", "koi_prad", Float),
    ("Transit duration", "koi_duration", Float),
    ("Period", "koi_period", Float),
    ("Period err1", "koi_period_err1", Float),
    ("Ingress Duration", "koi_ingress", Float),
    ("Impact Parameter", "koi_impact", Float),
    ("Inclination", "koi_incl", Float),
    ("Provenance", "koi_sparprov", Text),
    ("a/R", "koi_dor", Float),
    ("Transit Number", "koi_num_transits", Integer),
    ("Transit Model", "koi_trans_mod", Text),
    ("Time of transit", "koi_time0bk", Float),
    ("Time of transit err1", "koi_time0bk_err1", Float),
    ("Transit Depth", "koi_depth", Float),
    ("Semi-major Axis", "koi_sma", Float),
    ("r/R", "koi_ror", Float),
    ("r/R err1", "koi_ror_err1", Float),
    ("Age", "koi_sage", Float),
    ("Metallicity", "koi_smet", Float),
    ("Stellar Mass", "koi_smass", Float),
    ("Stellar Radius", "koi_srad", Float),
    ("Stellar Teff", "koi_steff", Integer),
    ("Logg", "koi_slogg", Float),
    ("KEP Mag", "koi_kepmag", Float),
    ("g Mag", "koi_gmag", Float),
    ("r Mag", "koi_rmag", Float),
    ("i Mag", "koi_imag", Float),
    ("z Mag", "koi_zmag", Float),
    ("J Mag", "koi_jmag", Float),
    ("H Mag", "koi_hmag", Float),
    ("K Mag", "koi_kmag", Float),
    ("KOI List", "koi_list_flag", Text),
    ("Last Update", "koi_vet_date", Text),
];

/// Kepler Input Catalog stellar properties.
pub const STAR_FIELDS: &[(&str, &str, FieldType)] = &[
    ("Kepler ID", "kic_kepler_id", Integer),
    ("RA (J2000)", "kic_degree_ra", Float),
    ("Dec (J2000)", "kic_dec", Float),
    ("RA PM (arcsec/yr)", "kic_pmra", Float),
    ("Dec PM (arcsec/yr)", "kic_pmdec", Float),
    ("u Mag", "kic_umag", Float),
    ("g Mag", "kic_gmag", Float),
    ("r Mag", "kic_rmag", Float),
    ("i Mag", "kic_imag", Float),
    ("z Mag", "kic_zmag", Float),
    ("Gred Mag", "kic_gredmag", Float),
    ("D51 Mag", "kic_d51mag", Float),
    ("J Mag", "kic_jmag", Float),
    ("H Mag", "kic_hmag", Float),
    ("K Mag", "kic_kmag", Float),
    ("Kepler Mag", "kic_kepmag", Float),
    ("2MASS ID", "kic_2mass_id", Text),
    ("2MASS Designation", "kic_tmid", Integer),
    ("SCP ID", "kic_scpid", Integer),
    ("Alt ID", "kic_altid", Integer),
    ("Alt ID Source", "kic_altsource", Integer),
    ("Star/Gal ID", "kic_galaxy", Integer),
    ("Isolated/Blend ID", "kic_blend", Integer),
    ("Var. ID", "kic_variable", Integer),
    ("Teff (deg K)", "kic_teff", Integer),
    ("Log G (cm/s/s)", "kic_logg", Float),
    ("Metallicity (solar=0.0)", "kic_feh", Float),
    ("E(B-V)", "kic_ebminusv", Float),
    ("A_V", "kic_av", Float),
    ("Radius (solar=1.0)", "kic_radius", Float),
    ("Kepmag Source", "kic_cq", Text),
    ("Photometry Qual", "kic_pq", Integer),
    ("Astrophysics Qual", "kic_aq", Integer),
    ("Catalog key", "kic_catkey", Integer),
    ("Scp Key", "kic_scpkey", Integer),
    ("Parallax (arcsec)", "kic_parallax", Float),
    ("Gal Lon (deg)", "kic_glon", Float),
    ("Gal Lat (deg)", "kic_glat", Float),
    ("Total PM (arcsec/yr)", "kic_pmtotal", Float),
    ("g-r color", "kic_grcolor", Float),
    ("J-K color", "kic_jkcolor", Float),
    ("g-K color", "kic_gkcolor", Float),
    ("RA hours (J2000)", "kic_ra", Float),
    ("Flag", "flag", Integer),
];

/// Kepler science datasets (light curves and target pixel files) with per-target photometry.
pub const DATASET_FIELDS: &[(&str, &str, FieldType)] = &[
    ("Kepler ID", "ktc_kepler_id", Integer),
    ("Investigation ID", "ktc_investigation_id", Text),
    ("Pep ID", "sci_pep_id", Integer),
    ("Dataset Name", "sci_data_set_name", Text),
    ("Quarter", "sci_data_quarter", Integer),
    ("Data Release", "sci_data_rel", Integer),
    ("RA (J2000)", "sci_ra", Float),
    ("Dec (J2000)", "sci_dec", Float),
    ("Target Type", "ktc_target_type", Text),
    ("Archive Class", "sci_archive_class", Text),
    ("Ref", "refnum", Integer),
    ("Actual Start Time", "sci_start_time", Text),
    ("Actual End Time", "sci_end_time", Text),
    ("Release Date", "sci_release_date", Text),
    ("RA PM", "kic_pmra", Float),
    ("Dec PM", "kic_pmdec", Float),
    ("U Mag", "kic_umag", Float),
    ("G Mag", "kic_gmag", Float),
    ("R Mag", "kic_rmag", Float),
    ("I Mag", "kic_imag", Float),
    ("Z Mag", "kic_zmag", Float),
    ("GRed Mag", "kic_gredmag", Float),
    ("D51 Mag", "kic_d51mag", Float),
    ("J Mag", "twoMass_jmag", Float),
    ("H Mag", "twoMass_hmag", Float),
    ("K Mag", "twoMass_kmag", Float),
    ("KEP Mag", "kic_kepmag", Float),
    ("2MASS ID", "twoMass_2mass_id", Text),
    ("2MASS Designation", "twoMass_tmid", Integer),
    ("2MASS conflict flag", "twoMass_conflictFlag", Text),
    ("SCP ID", "kic_scpid", Integer),
    ("Alt ID", "kic_altid", Integer),
    ("Alt ID Source", "kic_altsource", Integer),
    ("Star/Gal ID", "kic_galaxy", Integer),
    ("Isolated/Blend ID", "kic_blend", Integer),
    ("Var. ID", "kic_variable", Integer),
    ("Teff", "kic_teff", Integer),
    ("Log G", "kic_logg", Float),
    ("Metallicity", "kic_feh", Float),
    ("E(B-V)", "kic_ebminusv", Float),
    ("A_V", "kic_av", Float),
    ("Radius", "kic_radius", Float),
    ("Kepmag Source", "kic_cq", Text),
    ("Photometry Qual", "kic_pq", Integer),
    ("Astrophysics Qual", "kic_aq", Integer),
    ("Catalog key", "kic_catkey", Integer),
    ("Scp Key", "kic_scpkey", Integer),
    ("Parallax", "kic_parallax", Float),
    ("Gal Lon", "kic_glon", Float),
    ("Gal Lat", "kic_glat", Float),
    ("Total PM", "kic_pmtotal", Float),
    ("G-R color", "kic_grcolor", Float),
    ("J-K color", "twoMass_jkcolor", Float),
    ("G-K color", "twoMass_gkcolor", Float),
    ("Processing Date", "sci_generation_date", Text),
    ("crowding", "sci_crowdsap", Float),
    ("contamination", "sci_contamination", Float),
    ("flux fraction", "sci_flfrcsap", Float),
    ("cdpp3", "sci_Cdpp3_0", Float),
    ("cdpp6", "sci_Cdpp6_0", Float),
    ("cdpp12", "sci_Cdpp12_0", Float),
    ("Module", "sci_module", Integer),
    ("Output", "sci_output", Integer),
    ("Channel", "sci_channel", Integer),
    ("Skygroup_ID", "sci_skygroup_id", Integer),
    ("Condition flag", "condition_flag", Text),
];

/// K2 Ecliptic Plane Input Catalog targets.
pub const EPIC_FIELDS: &[(&str, &str, FieldType)] = &[
    ("EPIC", "id", Integer),
    ("RA", "k2_ra", Float),
    ("Dec", "k2_dec", Float),
    ("KepMag", "kp", Float),
    ("HIP", "hip", Integer),
    ("TYC", "tyc", Text),
    ("UCAC", "ucac", Text),
    ("2MASS", "twomass", Text),
    ("SDSS", "sdss", Text),
    ("Object type", "objtype", Text),
    ("Kepflag", "kepflag", Text),
    ("pmra", "pmra", Float),
    ("e_pmra", "e_pmra", Float),
    ("pmdec", "pmdec", Float),
    ("e_pmdec", "e_pmdec", Float),
    ("plx", "plx", Float),
    ("e_plx", "e_plx", Float),
    ("Bmag", "bmag", Float),
    ("e_Bmag", "e_bmag", Float),
    ("Vmag", "vmag", Float),
    ("e_Vmag", "e_vmag", Float),
    ("umag", "umag", Float),
    ("e_umag", "e_umag", Float),
    ("gmag", "gmag", Float),
    ("e_gmag", "e_gmag", Float),
    ("rmag", "rmag", Float),
    ("e_rmag", "e_rmag", Float),
    ("imag", "imag", Float),
    ("e_imag", "e_imag", Float),
    ("zmag", "zmag", Float),
    ("e_zmag", "e_zmag", Float),
    ("Jmag", "jmag", Float),
    ("e_Jmag", "e_jmag", Float),
    ("Hmag", "hmag", Float),
    ("e_Hmag", "e_hmag", Float),
    ("Kmag", "kmag", Float),
    ("e_Kmag", "e_kmag", Float),
    ("w1mag", "w1mag", Float),
    ("e_w1mag", "e_w1mag", Float),
    ("w2mag", "w2mag", Float),
    ("e_w2mag", "e_w2mag", Float),
    ("w3mag", "w3mag", Float),
    ("e_w3mag", "e_w3mag", Float),
    ("w4mag", "w4mag", Float),
    ("e_w4mag", "e_w4mag", Float),
    ("Teff", "teff", Float),
    ("e_teff", "e_teff", Float),
    ("logg", "logg", Float),
    ("e_logg", "e_logg", Float),
    ("[Fe/H]", "feh", Float),
    ("e_[Fe/H]", "e_feh", Float),
    ("Radius", "rad", Float),
    ("e_rad", "e_rad", Float),
    ("mass", "mass", Float),
    ("e_mass", "e_mass", Float),
    ("rho", "rho", Float),
    ("e_rho", "e_rho", Float),
    ("lum", "lum", Float),
    ("e_lum", "e_lum", Float),
    ("Distance", "d", Float),
    ("e_d", "e_d", Float),
    ("E(B-V)", "ebv", Float),
    ("2MASS Flag", "mflg", Text),
    ("Nearest Neighbor", "prox", Float),
    ("Nomad ID", "nomad", Text),
];

/// K2 campaign science datasets.
pub const K2_DATASET_FIELDS: &[(&str, &str, FieldType)] = &[
    ("K2 ID", "ktc_k2_id", Integer),
    ("Dataset Name", "sci_data_set_name", Text),
    ("Campaign", "sci_campaign", Integer),
    ("Object type", "objtype", Text),
    ("Data Release", "sci_data_rel", Integer),
    ("RA (J2000)", "sci_ra", Float),
    ("Dec (J2000)", "sci_dec", Float),
    ("Target Type", "ktc_target_type", Text),
    ("Archive Class", "sci_archive_class", Text),
    ("Ref", "refnum", Integer),
    ("Actual Start Time", "sci_start_time", Text),
    ("Actual End Time", "sci_end_time", Text),
    ("Investigation ID", "ktc_investigation_id", Text),
    ("RA PM", "pmRA", Float),
    ("RA PM Err", "e_pmRA", Float),
    ("Dec PM", "pmDEC", Float),
    ("Dec PM Err", "e_pmDEC", Float),
    ("Plx", "plx", Float),
    ("Plx Err", "e_plx", Float),
    ("U Mag", "umag", Float),
    ("U Mag Err", "e_umag", Float),
    ("B Mag", "bmag", Float),
    ("B Mag Err", "e_bmag", Float),
    ("V Mag", "vmag", Float),
    ("V Mag Err", "e_vmag", Float),
    ("G Mag", "gmag", Float),
    ("G Mag Err", "e_gmag", Float),
    ("R Mag", "rmag", Float),
    ("R Mag Err", "e_rmag", Float),
    ("I Mag", "imag", Float),
    ("I Mag Err", "e_imag", Float),
    ("Z Mag", "zmag", Float),
    ("Z Mag Err", "e_zmag", Float),
    ("J Mag", "jmag", Float),
    ("J Mag Err", "e_jmag", Float),
    ("H Mag", "hmag", Float),
    ("H Mag Err", "e_hmag", Float),
    ("K Mag", "kmag", Float),
    ("K Mag Err", "e_kmag", Float),
    ("KEP Mag", "kp", Float),
    ("Kep Flag", "kepflag", Text),
    ("Hip ID", "hip", Integer),
    ("Tyc ID", "tyc", Text),
    ("SDSS ID", "sdss", Text),
    ("UCAC ID", "ucac", Text),
    ("2MASS ID", "twoMass", Text),
    ("2MASS Flag", "mflg", Text),
    ("Processing Date", "sci_generation_date", Text),
    ("crowding", "sci_crowdsap", Float),
    ("contamination", "sci_contamination", Float),
    ("flux fraction", "sci_flfrcsap", Float),
    ("cdpp3", "sci_Cdpp3_0", Float),
    ("cdpp6", "sci_Cdpp6_0", Float),
    ("cdpp12", "sci_Cdpp12_0", Float),
    ("Module", "sci_module", Integer),
    ("Output", "sci_output", Integer),
    ("Channel", "sci_channel", Integer),
    ("Nearest Neighbor", "prox", Float),
    ("Nomad ID", "nomad", Text),
];

/// Kepler target positions on the focal plane across the four spacecraft rolls.
pub const TARGET_FIELDS: &[(&str, &str, FieldType)] = &[
    ("masterRA", "masterRA", Float),
    ("masterDec", "masterDec", Float),
    ("Kepler_ID", "kic_kepler_id", Integer),
    ("2MASS_ID", "twomass_2mass_id", Text),
    ("U_UBV", "U_UBV", Float),
    ("gr", "gr", Float),
    ("Parallax (arcsec)", "kic_parallax", Float),
    ("Channel_0", "Channel_0", Integer),
    ("Channel_1", "Channel_1", Integer),
    ("Channel_2", "Channel_2", Integer),
    ("Channel_3", "Channel_3", Integer),
    ("Module_0", "Module_0", Integer),
    ("Module_1", "Module_1", Integer),
    ("Module_2", "Module_2", Integer),
    ("Module_3", "Module_3", Integer),
    ("Row_0", "Row_0", Integer),
    ("Row_1", "Row_1", Integer),
    ("Row_2", "Row_2", Integer),
    ("Row_3", "Row_3", Integer),
    ("Column_0", "Column_0", Integer),
    ("Column_1", "Column_1", Integer),
    ("Column_2", "Column_2", Integer),
    ("Column_3", "Column_3", Integer),
];
